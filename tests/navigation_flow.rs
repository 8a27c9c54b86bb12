//! End-to-end navigation through the TEA loop, without a terminal

use puppy_app::{process, AppState, DetailView, InputKey, Message, NavIntent, ScreenView};
use puppy_core::{Catalog, PuppyId, Route};

fn press(state: &mut AppState, key: InputKey) {
    process(state, Message::Key(key));
}

#[test]
fn test_open_every_puppy_from_the_list() {
    let catalog = Catalog::builtin();

    for (index, puppy) in catalog.all().iter().enumerate() {
        let mut state = AppState::new();
        for _ in 0..index {
            press(&mut state, InputKey::Down);
        }
        press(&mut state, InputKey::Enter);

        assert_eq!(state.route(), &Route::detail(puppy.id()));
        match state.screen() {
            ScreenView::Detail(DetailView::Puppy(detail)) => {
                assert_eq!(detail.name, puppy.name());
                assert_eq!(detail.age, puppy.age());
                assert_eq!(detail.description, puppy.description());
            }
            other => panic!("expected detail for {}, got {other:?}", puppy.id()),
        }

        press(&mut state, InputKey::Esc);
        assert_eq!(state.route(), &Route::List);
        assert_eq!(state.selected, index);
    }
}

#[test]
fn test_go_to_detail_two_and_back() {
    let mut state = AppState::new();
    process(
        &mut state,
        Message::Navigate(NavIntent::GoToDetail(PuppyId(2))),
    );
    assert_eq!(state.route(), &Route::detail(PuppyId(2)));

    process(&mut state, Message::Navigate(NavIntent::Back));
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_stale_id_degrades_to_empty_detail() {
    let mut state = AppState::new();
    process(
        &mut state,
        Message::Navigate(NavIntent::GoToDetail(PuppyId(999))),
    );
    assert_eq!(state.screen(), ScreenView::Detail(DetailView::Empty));

    // Back still works from an empty detail
    press(&mut state, InputKey::Esc);
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_list_wraps_nowhere() {
    let mut state = AppState::new();
    for _ in 0..10 {
        press(&mut state, InputKey::Down);
    }
    assert_eq!(state.selected, 3);
    for _ in 0..10 {
        press(&mut state, InputKey::Up);
    }
    assert_eq!(state.selected, 0);
}

#[test]
fn test_quit_from_detail() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}
