mod browser;
mod console;
mod domain;
mod driver;
mod errors;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = driver::run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
