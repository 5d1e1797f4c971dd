use multi_logger::{context, handles::BufferHandle, handles::LogHandle, Level};

#[test]
fn test_buffer_is_bounded() {
    const LIMIT: usize = 5;
    let handle = BufferHandle::new("APP", LIMIT);

    for i in 0..20 {
        handle.log(Level::Info, &format!("line {i}"), &context! {});
    }

    let events = handle.snapshot();
    assert_eq!(events.len(), LIMIT);
    // oldest events were discarded
    assert_eq!(events[0].message, "line 15");
    assert_eq!(events[LIMIT - 1].message, "line 19");
}

#[test]
fn test_zero_capacity_retains_nothing() {
    let handle = BufferHandle::new("APP", 0);
    handle.log(Level::Info, "discarded", &context! {});
    handle.log(Level::Error, "also discarded", &context! {});
    assert!(handle.snapshot().is_empty());
}

#[test]
fn test_clones_share_the_buffer() {
    let handle = BufferHandle::new("APP", 10);
    let observer = handle.clone();

    handle.log(Level::Error, "shared", &context! { "attempt" => 3 });

    let events = observer.snapshot();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::Error);
    assert_eq!(events[0].context["attempt"], 3);
}
