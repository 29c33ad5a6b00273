//! Landing page view

use super::{escape, format_amount, format_optional, full_screen_message, layout, PAGE_CLASS};
use crate::api::types::{HealthStatus, MetalRate, Product};
use crate::services::LandingPage;

const TITLE: &str = "Masi Jewellers";
const PANEL_CLASS: &str = "bg-white/10 backdrop-blur-lg rounded-lg p-6 border border-white/20";

/// Render the landing page in its current state
pub fn render_landing_page(page: &LandingPage) -> String {
    if page.is_loading() {
        return full_screen_message(TITLE, "Loading Masi Jewellers...");
    }

    let body = format!(
        r#"<div class="{PAGE_CLASS}">
  <div class="container mx-auto px-4 py-16">
    <div class="text-center mb-12">
      <h1 class="text-6xl font-bold text-white mb-4">💎 Masi Jewellers</h1>
      <p class="text-xl text-yellow-100">Premium Gold &amp; Silver Jewelry + Chit Funds</p>
    </div>
    <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
{status}
{rates}
{products}
    </div>
{services}
  </div>
</div>"#,
        status = status_panel(page.health.as_ref()),
        rates = rates_panel(&page.rates),
        products = products_panel(page.featured_products()),
        services = services_section(),
    );

    layout(TITLE, &body)
}

fn status_panel(health: Option<&HealthStatus>) -> String {
    let block = match health {
        Some(health) => format!(
            r#"        <div class="status-block space-y-2">
          <p class="text-green-300">✅ Status: {}</p>
          <p class="text-blue-200">✅ Database: {}</p>
          <p class="text-yellow-200 text-sm">{}</p>
        </div>"#,
            escape(&health.status),
            escape(&health.database),
            escape(&health.message),
        ),
        None => String::new(),
    };

    format!(
        r#"      <div class="{PANEL_CLASS}">
        <h2 class="text-2xl font-bold text-white mb-4">🏪 System Status</h2>
{block}
      </div>"#
    )
}

fn rates_panel(rates: &[MetalRate]) -> String {
    let rows: String = rates
        .iter()
        .map(|rate| {
            format!(
                r#"          <div class="rate-row bg-white/10 rounded-lg p-3" data-id="{}">
            <div class="flex justify-between">
              <span class="text-white capitalize font-semibold">{}</span>
              <span class="text-yellow-300 font-bold">₹{}/g</span>
            </div>
          </div>
"#,
                rate.id,
                escape(&rate.metal_type),
                format_amount(rate.rate_per_gram),
            )
        })
        .collect();

    format!(
        r#"      <div class="{PANEL_CLASS}">
        <h2 class="text-2xl font-bold text-white mb-4">📈 Today&#39;s Rates</h2>
        <div class="space-y-3">
{rows}        </div>
      </div>"#
    )
}

fn products_panel(products: &[Product]) -> String {
    let cards: String = products
        .iter()
        .map(|product| {
            format!(
                r#"          <div class="product-card bg-white/10 rounded-lg p-3" data-id="{}">
            <p class="text-white font-semibold text-sm">{}</p>
            <p class="text-yellow-200 text-xs">{}g {}</p>
            <div class="flex justify-between mt-2">
              <span class="text-green-300 text-sm">₹{}</span>
              <span class="text-blue-200 text-sm">Stock: {}</span>
            </div>
          </div>
"#,
                product.id,
                escape(&product.name),
                format_amount(product.weight_grams),
                escape(&product.metal_type),
                format_optional(product.current_price),
                format_optional(product.stock_quantity),
            )
        })
        .collect();

    format!(
        r#"      <div class="{PANEL_CLASS}">
        <h2 class="text-2xl font-bold text-white mb-4">💎 Featured Products</h2>
        <div class="space-y-3 max-h-64 overflow-y-auto">
{cards}        </div>
      </div>"#
    )
}

fn services_section() -> &'static str {
    r#"    <div class="max-w-4xl mx-auto mt-12">
      <h3 class="text-3xl font-bold text-white text-center mb-8">Our Services</h3>
      <div class="grid md:grid-cols-2 gap-6">
        <div class="bg-amber-500/20 rounded-lg p-6">
          <div class="text-3xl mb-4">💍</div>
          <div class="text-white font-semibold text-lg">Gold &amp; Silver Jewelry</div>
          <div class="text-amber-200 text-sm">Premium handcrafted jewelry with hallmarking</div>
        </div>
        <div class="bg-blue-500/20 rounded-lg p-6">
          <div class="text-3xl mb-4">💰</div>
          <div class="text-white font-semibold text-lg">Chit Funds</div>
          <div class="text-blue-200 text-sm">Flexible savings schemes for your financial goals</div>
        </div>
      </div>
    </div>
    <div class="max-w-4xl mx-auto mt-12">
      <h3 class="text-3xl font-bold text-white text-center mb-8">Business Management</h3>
      <div class="text-center">
        <a href="/customers" class="bg-white/20 hover:bg-white/30 rounded-lg p-6 inline-block border border-white/20">
          <div class="text-4xl mb-4">👥</div>
          <div class="text-white font-semibold text-lg">Customer Management</div>
          <div class="text-yellow-200 text-sm">Manage customer database and KYC records</div>
        </a>
      </div>
    </div>"#
}
