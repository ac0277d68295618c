fn main() {
    airq::cli::run();
}
