//! Category Section Component
//!
//! One section per non-empty catalog category, cards in priority order.

use leptos::prelude::*;

use crate::components::FeatureCard;
use crate::models::MenuCategory;

/// A category header plus its feature cards
#[component]
pub fn CategorySection(category: MenuCategory) -> impl IntoView {
    view! {
        <section class=format!("category-section category-{}", category.id.as_str())>
            <div class="category-header">
                <h2 class="category-title">{category.title}</h2>
                <span class="category-desc">{category.description}</span>
                <span class="category-count">{category.items.len()}</span>
            </div>
            <div class="card-list">
                {category.items.into_iter().map(|item| view! {
                    <FeatureCard item=item />
                }).collect_view()}
            </div>
        </section>
    }
}
