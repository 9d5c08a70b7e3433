fn main() {
    syncgen::app::cli::run();
}
