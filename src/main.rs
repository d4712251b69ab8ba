fn main() {
    let result = shardview::run();
    let error = match result {
        Err(error) => error,
        Ok(0) => return,
        Ok(num) => std::process::exit(num),
    };

    // Provide better error messages for cases where we can provide suggestions to the user.
    if let Some(error) = error.downcast_ref::<shardview::errors::InputRequired>() {
        eprintln!("{}", error);
        eprintln!(
            "Capture the input from the cluster with: curl -s '<cluster-url>/{}' > {}.json",
            error.endpoint(),
            error.option(),
        );
        std::process::exit(1);
    }
    if let Some(shardview_conf::Error::PathNotFound(path)) = error.downcast_ref() {
        eprintln!("Configuration file not found at '{}'", path);
        eprintln!("Omit the --config option to use the default configuration");
        std::process::exit(1);
    }

    // Print the error in detailed format for all other cases.
    eprintln!("{:?}", error);
    std::process::exit(1);
}
