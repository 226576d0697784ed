use super::*;

#[test]
fn fixed_surface_resolves_constraints() {
    let mut s = FixedSurface::new(Size::new(200.0, 300.0));
    let size = s.measure(MeasureSpec::Exactly(360.0), MeasureSpec::AtMost(250.0));
    assert_eq!(size, Size::new(360.0, 250.0));
    assert_eq!(s.height(), 250.0);

    s.measure(MeasureSpec::Exactly(360.0), MeasureSpec::AtMost(800.0));
    assert_eq!(s.height(), 300.0);

    // Wrap content: an exact parent height is still only an upper bound.
    s.measure(MeasureSpec::Exactly(360.0), MeasureSpec::Exactly(800.0));
    assert_eq!(s.measured_size(), Size::new(360.0, 300.0));
}

#[test]
fn fixed_surface_records_applied_height() {
    let mut s = FixedSurface::new(Size::new(10.0, 10.0));
    assert_eq!(s.applied_height(), None);
    s.set_height(42.0);
    assert_eq!(s.applied_height(), Some(42.0));
}

#[test]
fn boxed_surface_forwards() {
    let mut s: Box<dyn Surface> = Box::new(
        FixedSurface::new(Size::new(10.0, 10.0))
            .with_strip_height(56.0)
            .with_click_handler(),
    );
    assert!(s.has_click_handler());
    assert_eq!(s.persistent_strip_height(), Some(56.0));
    s.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    assert_eq!(s.height(), 10.0);
}
