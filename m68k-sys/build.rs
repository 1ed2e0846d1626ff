fn main() {
    // the constants need no linking, only the headers for the systest
    let library = match pkg_config::Config::new()
        .cargo_metadata(false)
        .env_metadata(true)
        .probe("unicorn")
    {
        Ok(library) => library,
        Err(e) => {
            println!("cargo:warning=unicorn headers not found: {}", e);
            return;
        }
    };

    let includedir = match pkg_config::get_variable("unicorn", "includedir") {
        Ok(includedir) => includedir,
        Err(e) => {
            println!("cargo:warning=unicorn includedir not found: {}", e);
            return;
        }
    };
    println!("cargo:includedir={}", includedir);
    println!("cargo:version={}", library.version);
}
