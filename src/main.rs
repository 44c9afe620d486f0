fn main() {
    plugctl::run_cli();
}
