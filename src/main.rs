fn main() {
    gpu_launch::app::cli::run();
}
