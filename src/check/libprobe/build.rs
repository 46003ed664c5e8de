// The build configuration under test for the library-linked target.
// Deliberately injects a different integer than the standalone `defines`
// target: configuration is scoped per compiled target.
fn main() {
    println!("cargo:rustc-env=DEFINE_WITHOUT_VALUE=1");
    println!("cargo:rustc-env=DEFINE_WITH_INT_VALUE=64");
    println!("cargo:rustc-env=DEFINE_WITH_STRING_VALUE=hello");
    println!("cargo:rustc-env=DEFINE_WITH_STRING_NUMBER_VALUE=420");
}
