// The build configuration under test: inject the symbol set the checker
// expects, the way `-D` flags would reach a native target.
fn main() {
    // a bare define carries the conventional value 1
    println!("cargo:rustc-env=DEFINE_WITHOUT_VALUE=1");
    println!("cargo:rustc-env=DEFINE_WITH_INT_VALUE=69");
    println!("cargo:rustc-env=DEFINE_WITH_STRING_VALUE=hello");
    println!("cargo:rustc-env=DEFINE_WITH_STRING_NUMBER_VALUE=420");
}
