fn main() {
    kabal::run();
}
