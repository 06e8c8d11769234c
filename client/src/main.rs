#[cfg(feature = "csr")]
fn main() {
    client::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("client is a browser build; run `trunk serve` (enables the `csr` feature)");
}
