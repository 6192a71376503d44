fn main() {
    if let Err(err) = netlayer_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
