use minefield::error::Result;
use minefield::sweep::solve;
use minefield::Generator;

fn run() -> Result<()> {
  let mut generator = Generator::new();
  let mut field = generator.generate(6, 6)?;

  print!("{}", field);
  println!();

  solve(&mut field)?;
  print!("{}", field);
  Ok(())
}

fn main() {
  env_logger::init();

  if let Err(err) = run() {
    eprintln!("{}", err);
    std::process::exit(1);
  }
}
