fn main() {
    #[cfg(target_arch = "wasm32")]
    auto_info_frontend::run();
}
