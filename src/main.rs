use std::{
    env,
    fs::{self, create_dir},
    path::PathBuf,
    process,
    time::Instant,
};

use kaleidoscope::{display_error, interpreter::Interpreter};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: kaleidoscope <source-file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').next_back().unwrap_or(file_path)
    } else {
        file_path
    };

    let source = fs::read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let mut interpreter =
        match Interpreter::from_source(source.clone(), Some(String::from(file_name))) {
            Ok(interpreter) => interpreter,
            Err(error) => {
                display_error(&error, &source);
                process::exit(1);
            }
        };

    let ir = match interpreter.run() {
        Ok(ir) => ir,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    println!("Translated in {:?}", start.elapsed());

    if !PathBuf::from("build").exists() {
        create_dir("build").expect("Failed to create build directory!");
    }
    fs::write("build/out.ll", &ir).expect("Failed to write build/out.ll!");

    print!("{}", ir);
}
