use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn notifies_in_registration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut listeners = ActivationListeners::default();
    for tag in ["l1", "l2"] {
        let seen = Rc::clone(&seen);
        listeners.add(move |ev| {
            seen.borrow_mut().push((tag, ev.layer()));
            Ok(())
        });
    }

    assert_eq!(listeners.notify(Layer::Back).unwrap(), None);
    assert_eq!(
        *seen.borrow(),
        vec![("l1", Layer::Back), ("l2", Layer::Back)]
    );
}

#[test]
fn removed_listener_is_not_called() {
    let calls = Rc::new(RefCell::new(0));
    let mut listeners = ActivationListeners::default();
    let id = {
        let calls = Rc::clone(&calls);
        listeners.add(move |_| {
            *calls.borrow_mut() += 1;
            Ok(())
        })
    };
    assert!(listeners.remove(id));
    assert!(!listeners.remove(id));
    assert!(listeners.is_empty());

    listeners.notify(Layer::Front).unwrap();
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn failing_listener_halts_the_round() {
    let reached = Rc::new(RefCell::new(false));
    let mut listeners = ActivationListeners::default();
    listeners.add(|_| Err(anyhow::anyhow!("listener failed")));
    {
        let reached = Rc::clone(&reached);
        listeners.add(move |_| {
            *reached.borrow_mut() = true;
            Ok(())
        });
    }

    let err = listeners.notify(Layer::Back).unwrap_err();
    assert!(err.to_string().contains("listener failed"));
    assert!(!*reached.borrow());
}

#[test]
fn last_follow_up_request_wins() {
    let mut listeners = ActivationListeners::default();
    listeners.add(|ev| {
        ev.activate(Layer::Back);
        Ok(())
    });
    listeners.add(|ev| {
        ev.activate(Layer::Front);
        Ok(())
    });
    assert_eq!(listeners.notify(Layer::Back).unwrap(), Some(Layer::Front));
    assert_eq!(listeners.len(), 2);
}
