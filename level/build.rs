use std::io::Write;
use std::{error::Error, fs::File, io::BufWriter};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR environment variable must be specified");
    let level_path = std::env::var("LEVEL_PATH").unwrap_or_else(|_| "level.txt".to_owned());

    println!("cargo:rerun-if-env-changed=LEVEL_PATH");
    println!("cargo:rerun-if-changed={level_path}");

    let level = level_compiler::compile_level(&level_path)?;

    let output_file = File::create(format!("{out_dir}/level.rs"))?;
    let mut writer = BufWriter::new(output_file);
    writeln!(writer, "{}", level)?;

    Ok(())
}
