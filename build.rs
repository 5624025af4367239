fn main() {
    #[cfg(windows)]
    {
        if std::path::Path::new("assets/icons/tomeo.ico").exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/icons/tomeo.ico");
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed icon: {}", e);
            }
        } else {
            println!("cargo:warning=tomeo.ico not found, skipping icon embedding");
        }
    }
}
