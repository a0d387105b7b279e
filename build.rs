fn main() {
    #[cfg(feature = "docs")]
    if let Ok(meta) = rustc_version::version_meta() {
        if meta.channel == rustc_version::Channel::Nightly {
            println!("cargo:rustc-cfg=CHANNEL_NIGHTLY");
        }
    }
}
