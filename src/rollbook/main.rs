mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e.field_errors() {
            Some(errors) => {
                eprintln!("Error: Please correct the following fields");
                eprint!("{}", cli::render::render_field_errors(errors));
            }
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
