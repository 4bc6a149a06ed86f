//! Trunk entrypoint. Build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    client::mount();
}
