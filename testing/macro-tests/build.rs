use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    propbind_build::build!("bindings.json");

    Ok(())
}
