/// Join path segments into the fragment shown in messages: `["a", "0"]` → `#/a/0`.
#[must_use]
pub fn build_fragment<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut out = String::from("#/");
    for (i, segment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(segment.as_ref());
    }
    out
}
