fn main() {
    poker_advisor::cli::run();
}
