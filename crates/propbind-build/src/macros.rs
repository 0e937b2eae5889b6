//! Build-script helper that generates bindings from a JSON inventory into
//! `OUT_DIR`. Types that fail are printed as cargo warnings.
#[macro_export]
macro_rules! build {
    ($inventory:expr) => {
        $crate::build!($inventory, $crate::config::CONFIG_FILE)
    };
    ($inventory:expr, $config:expr) => {
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $inventory);
        println!("cargo:rerun-if-changed={}", $config);

        // Get the output directory set by Cargo
        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        //
        // BINDINGS
        //

        let report = $crate::generate_dir($inventory, $config, &out_dir)?;
        for diagnostic in &report.diagnostics {
            println!("cargo:warning={diagnostic}");
        }
    };
}
