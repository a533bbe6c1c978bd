use telemview::selector::SelectorScreen;
use telemview::startup::AppDescriptor;

#[test]
fn default_choice_is_the_first_app() {
    let apps = vec![
        AppDescriptor::new("first"),
        AppDescriptor::new("second"),
        AppDescriptor::new("third"),
    ];
    let screen = SelectorScreen::new(apps);
    assert_eq!(
        screen.chosen().identifier,
        "first",
        "confirming without touching the combo box opens the first entry"
    );
}
