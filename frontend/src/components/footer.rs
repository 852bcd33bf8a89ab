use yew::prelude::*;

use crate::content::{BRAND, COPYRIGHT, FOOTER_BLURB, FOOTER_COLUMNS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{ BRAND }</h3>
                        <p class="muted">{ FOOTER_BLURB }</p>
                    </div>
                    {
                        FOOTER_COLUMNS.iter().map(|column| html! {
                            <div key={column.heading}>
                                <h4 class="footer-heading">{ column.heading }</h4>
                                <ul class="footer-list muted">
                                    { for column.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="footer-bottom muted">
                    <p>{ COPYRIGHT }</p>
                </div>
            </div>
        </footer>
    }
}
