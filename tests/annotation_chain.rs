use deeperror::{deepest_error, deepest_message, with_context, with_position, AnnotatedError};
use std::io;

fn leaf() -> Option<io::Error> {
    Some(io::Error::new(io::ErrorKind::Other, "origin error aab"))
}

fn mid() -> Option<AnnotatedError> {
    with_context(leaf(), "call aaa failed")
}

fn top() -> Option<AnnotatedError> {
    with_context(mid(), "call a failed")
}

fn nothing_failed() -> Option<io::Error> {
    None
}

fn position_chain() -> Option<AnnotatedError> {
    let origin = with_position(Some("origin error bbc"));
    let middle = with_position(origin);
    with_position(middle)
}

#[test]
fn test_chain_renders_messages_then_markers() {
    let err = top().expect("chain should fail");
    let text = err.to_string();
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "call a failed call aaa failed origin error aab");
    assert!(lines[1].starts_with("--> tests/annotation_chain.rs:"));
    assert!(lines[2].starts_with("--> tests/annotation_chain.rs:"));
    assert!(lines[1].ends_with('\t') && lines[2].ends_with('\t'));

    // the mid() annotation comes first, the outer top() marker last
    let line_of = |marker: &str| -> u32 {
        marker.trim_end_matches('\t').rsplit(':').next().unwrap().parse().unwrap()
    };
    assert!(line_of(lines[1]) < line_of(lines[2]));
}

#[test]
fn test_chain_deepest_message() {
    let err = top().unwrap();
    assert_eq!(deepest_error(Some(&err)), "origin error aab");
    assert_eq!(err.deepest_message(), "origin error aab");
}

#[test]
fn test_chain_deepest_from_text_only() {
    let text = top().unwrap().to_string();
    assert_eq!(deepest_message(&text), "call a failed call aaa failed origin error aab");
}

#[test]
fn test_absent_errors_propagate() {
    assert!(with_context(nothing_failed(), "call aaa failed").is_none());
    assert!(with_position(nothing_failed()).is_none());
    assert!(deeperror::with_context!(nothing_failed(), "call {} failed", "a").is_none());
    assert_eq!(deepest_error(None), "");
}

#[test]
fn test_position_only_chain() {
    let err = position_chain().unwrap();
    let text = err.to_string();

    assert!(text.starts_with("origin error bbc\n--> tests/annotation_chain.rs:"));
    assert_eq!(text.matches("\n--> tests/annotation_chain.rs:").count(), 3);
    assert_eq!(deepest_error(Some(&err)), "origin error bbc");
}

#[test]
fn test_formatted_annotation() {
    let err = deeperror::with_context!(leaf(), "call {} failed", "x").unwrap();
    assert!(err.to_string().starts_with("call x failed origin error aab\n--> "));
}

#[test]
fn test_annotated_error_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<AnnotatedError>();

    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || with_context(Some(format!("worker {i}")), "join").unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let err = handle.join().unwrap();
        assert_eq!(err.deepest_message(), format!("worker {i}"));
    }
}
