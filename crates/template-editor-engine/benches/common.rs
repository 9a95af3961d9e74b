// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_template_content(size: usize) -> String {
    let base = "# Agreement\n\nThe **Buyer** agrees to pay `[{price}]` to the _Seller_ on ++delivery++.\n\n- Goods are delivered\n  - on time\n- Payment is made\n\n> Either party may terminate.\n\n```\n`if late`\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- Item {i} at level {level} with **bold** text\n"));
        }
    }
    content
}
