use fastlane_setup::environment::Environment;
use fastlane_setup::project::Project;

fn project(name: &str) -> Project {
    Project::from_descriptor(&format!("{name}.xcodeproj"))
}

#[test]
fn test_project_environment_values() {
    let env = Environment::for_project(&project("MyApp")).unwrap();

    assert_eq!(env.len(), 9);
    assert!(!env.is_empty());
    assert_eq!(env.get("__XCODE_PROJECT_NAME__"), Some("MyApp"));
    assert_eq!(env.get("__XCODE_SCHEME_NAME__"), Some("MyApp"));
    assert_eq!(env.get("__XCODE_WORKSPACE_NAME__"), Some("MyApp.xcworkspace"));
    assert_eq!(env.get("__RUBY_GEMSET__"), Some("myapp"));
    assert_eq!(env.get("__IOS_VERSION__"), Some("12.0"));
    assert_eq!(env.get("__IOS_DEVICE__"), Some("iPhone X (12.4)"));
    assert_eq!(env.get("__RUBY_VERSION__"), Some("2.6.3"));
    assert_eq!(env.get("__SWIFT_VERSION__"), Some("5.0"));
    assert_eq!(env.get("__XCODE_VERSION__"), Some("10.3"));
}

#[test]
fn test_gitignore_example() {
    let env = Environment::new([("__XCODE_PROJECT_NAME__", "Foo")]).unwrap();
    assert_eq!(
        env.apply("build/\n__XCODE_PROJECT_NAME__.xcodeproj\n"),
        "build/\nFoo.xcodeproj\n"
    );
}

#[test]
fn test_no_token_survives_substitution() {
    let env = Environment::for_project(&project("MyApp")).unwrap();
    let text: String = env.tokens().map(|t| format!("{t} and {t}{t}\n")).collect();

    let rendered = env.apply(&text);

    for token in env.tokens() {
        assert!(!rendered.contains(token), "{token} left in output");
    }
    assert_eq!(env.occurrences(&rendered), 0);
}

#[test]
fn test_value_containing_token_is_not_expanded() {
    let env = Environment::new([("__A__", "__B__"), ("__B__", "b")]).unwrap();

    let rendered = env.apply("__A__ __B__");

    assert_eq!(rendered, "__B__ b");
    assert_eq!(env.occurrences(&rendered), 1);
}

#[test]
fn test_insertion_order_is_not_observable() {
    let forward = Environment::new([("__A__", "__B__"), ("__B__", "__A__")]).unwrap();
    let backward = Environment::new([("__B__", "__A__"), ("__A__", "__B__")]).unwrap();
    let text = "__A__-__B__-__A____B__";

    assert_eq!(forward.apply(text), "__B__-__A__-__B____A__");
    assert_eq!(forward.apply(text), backward.apply(text));
}

#[test]
fn test_text_without_tokens_is_unchanged() {
    let env = Environment::for_project(&project("MyApp")).unwrap();
    let text = "platform :ios\n__NOT_A_TOKEN__\n";
    assert_eq!(env.apply(text), text);
}

#[test]
fn test_regex_metacharacters_in_tokens_are_literal() {
    let env = Environment::new([("$(NAME)", "App"), ("a.c", "x")]).unwrap();
    assert_eq!(env.apply("$(NAME) abc a.c"), "App abc x");
}
