#![cfg(feature = "ssr")]

use super::*;

fn render(recipe: RecipeSummary) -> String {
    Owner::new().with(|| {
        let on_open = Callback::new(|_: String| {});
        view! { <RecipeCard recipe=recipe on_open=on_open/> }.to_html()
    })
}

#[test]
fn card_carries_id_lazy_thumbnail_and_name() {
    let html = render(RecipeSummary {
        id: "52772".to_owned(),
        name: "Teriyaki Chicken Casserole".to_owned(),
        thumbnail: "https://img/52772.jpg".to_owned(),
    });

    assert!(html.contains(r#"class="recipe-item""#));
    assert!(html.contains(r#"data-id="52772""#));
    assert!(html.contains(r#"src="https://img/52772.jpg""#));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains(r#"alt="Teriyaki Chicken Casserole""#));
    assert!(html.contains("<h3>Teriyaki Chicken Casserole</h3>"));
}

#[test]
fn card_with_null_name_still_renders() {
    let html = render(RecipeSummary {
        id: "1".to_owned(),
        name: String::new(),
        thumbnail: String::new(),
    });

    assert!(html.contains(r#"data-id="1""#));
    assert!(html.contains(r#"alt="""#));
}
