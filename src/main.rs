fn main() {
    lessonbot::app::cli::run();
}
