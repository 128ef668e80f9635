fn main() {
    repo_browser::run();
}
