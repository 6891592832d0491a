// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_post_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content\nwrapped over `two` lines.\n\n- Bullet point\n- Another item & more\n\n    fn example() {\n        println!(\"<hello>\");\n    }\n\n";
    base.repeat(size)
}
