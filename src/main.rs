fn main() {
    moviedb::app::cli::run();
}
