fn main() {
    std::process::exit(calc_app::run_from_env());
}
