use charset_detector::CharsetDetector;
use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_all = false;
    let mut text_arg: Option<String> = None;
    let mut file_arg: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => show_all = true,
            "--text" => {
                if let Some(text) = args.get(i + 1) {
                    text_arg = Some(text.clone());
                    i += 1;
                } else {
                    eprintln!("ERROR: --text flag requires an argument.");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [FILE] [--text <TEXT>] [--all]\n\
                     Reads from stdin when neither FILE nor --text is given.",
                    args[0]
                );
                return;
            }
            other => {
                if file_arg.is_some() {
                    eprintln!("ERROR: Unexpected argument: {}", other);
                    std::process::exit(1);
                }
                file_arg = Some(other.to_string());
            }
        }
        i += 1;
    }

    let data = if let Some(filename) = &file_arg {
        match fs::read(filename) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("ERROR: Failed to read file {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    } else if let Some(text) = text_arg {
        text.into_bytes()
    } else {
        // Read from stdin when neither a file nor a text argument is given
        let mut buffer = Vec::new();
        match io::stdin().read_to_end(&mut buffer) {
            Ok(_) => buffer,
            Err(e) => {
                eprintln!("ERROR: Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        }
    };

    let detector = match CharsetDetector::new() {
        Ok(detector) => detector,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if data.is_empty() {
        println!("No data provided for encoding detection.");
        return;
    }

    if show_all {
        println!("Candidates:");
        for (i, candidate) in detector.detect_all(&data).iter().enumerate() {
            println!(
                "  {}. {} (confidence {:.2}, language {})",
                i + 1,
                candidate.charset,
                candidate.confidence,
                candidate.language.unwrap_or("-")
            );
        }
    }

    match detector.detect_best(&data) {
        Ok(best) => println!(
            "Detected charset: {}, Language: {}",
            best.charset,
            best.language.unwrap_or("unknown")
        ),
        Err(_) => println!("No charset detected."),
    }
}
