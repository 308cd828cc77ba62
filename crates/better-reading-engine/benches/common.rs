// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content and `inline code` between words.\n\n> A quoted line of prose %%with a comment%% inside.\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\nMixed scripts: café, привет, 日本語のテキスト.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn line_windows(content: &str, lines_per_window: usize) -> Vec<(usize, usize)> {
    let starts: Vec<usize> = std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .filter(|&s| s < content.len())
        .collect();
    (0..starts.len())
        .step_by(lines_per_window)
        .map(|i| {
            let end = starts.get(i + lines_per_window).copied();
            (starts[i], end.unwrap_or(content.len()))
        })
        .collect()
}
