/// Strips markdown decoration from model output before it reaches the
/// client. Substitutions run in a fixed order; later steps operate on the
/// output of earlier ones. Whitespace left behind by a removal is kept
/// as-is.
pub fn clean(text: &str) -> String {
    let text = text.replace("**", "");
    let text = text.replace('*', "");

    // Dash bullets are only stripped at the start of a line.
    let mut stripped = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        stripped.push_str(line.strip_prefix("- ").unwrap_or(line));
    }

    let stripped = stripped.replace('•', "");
    stripped.replace('#', "")
}
