//! Customer management page view

use super::{escape, full_screen_message, layout, PAGE_CLASS};
use crate::api::types::Customer;
use crate::services::CustomerPage;

const TITLE: &str = "Customer Management - Masi Jewellers";
const BADGE_CLASS: &str = "px-2 py-1 rounded text-xs font-medium";

/// Short labelled tag shown in a table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

/// Tier badge; premium customers get the gold treatment
pub fn type_badge(customer: &Customer) -> Badge {
    let class = if customer.customer_type.is_premium() {
        "bg-yellow-500 text-black"
    } else {
        "bg-blue-500 text-white"
    };

    Badge {
        label: customer.customer_type.as_str().to_string(),
        class,
    }
}

pub fn kyc_badge(kyc_verified: bool) -> Badge {
    if kyc_verified {
        Badge {
            label: "Verified".to_string(),
            class: "bg-green-500 text-white",
        }
    } else {
        Badge {
            label: "Pending".to_string(),
            class: "bg-red-500 text-white",
        }
    }
}

/// Email cell text, `N/A` when missing or empty
pub fn email_cell(customer: &Customer) -> &str {
    match customer.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => "N/A",
    }
}

/// Render the customer page in its current state
pub fn render_customer_page(page: &CustomerPage) -> String {
    match page {
        CustomerPage::Loading => full_screen_message(TITLE, "Loading Customers..."),
        CustomerPage::Error(message) => full_screen_message(TITLE, &format!("Error: {}", message)),
        CustomerPage::Ready(customers) => layout(TITLE, &customer_table(customers)),
    }
}

fn badge_html(badge: &Badge) -> String {
    format!(
        r#"<span class="{BADGE_CLASS} {}">{}</span>"#,
        badge.class,
        escape(&badge.label)
    )
}

fn customer_row(customer: &Customer) -> String {
    format!(
        r#"            <tr class="customer-row border-b border-white/10 hover:bg-white/5" data-id="{id}">
              <td class="py-3 px-4 font-semibold">{name}</td>
              <td class="py-3 px-4">{phone}</td>
              <td class="py-3 px-4 text-sm">{email}</td>
              <td class="py-3 px-4">{customer_type}</td>
              <td class="py-3 px-4">{kyc}</td>
              <td class="py-3 px-4">
                <button type="button" class="text-yellow-300 hover:text-yellow-100 mr-3 text-sm">View</button>
                <button type="button" class="text-blue-300 hover:text-blue-100 mr-3 text-sm">Edit</button>
                <button type="button" class="text-green-300 hover:text-green-100 text-sm">Purchase History</button>
              </td>
            </tr>
"#,
        id = customer.id,
        name = escape(&customer.name),
        phone = escape(&customer.phone),
        email = escape(email_cell(customer)),
        customer_type = badge_html(&type_badge(customer)),
        kyc = badge_html(&kyc_badge(customer.kyc_verified)),
    )
}

fn customer_table(customers: &[Customer]) -> String {
    let rows: String = customers.iter().map(customer_row).collect();

    format!(
        r#"<div class="{PAGE_CLASS}">
  <div class="container mx-auto px-4 py-8">
    <div class="mb-8">
      <div class="flex justify-between items-center">
        <div>
          <h1 class="text-4xl font-bold text-white mb-2">Customer Management</h1>
          <p class="text-yellow-100">Manage customer information and purchase history</p>
        </div>
        <a href="/" class="text-yellow-200 hover:text-white">← Back to Home</a>
      </div>
    </div>
    <div class="bg-white/10 backdrop-blur-lg rounded-lg p-6 border border-white/20">
      <div class="flex justify-between items-center mb-6">
        <h2 class="text-2xl font-bold text-white">Customer Database ({count} customers)</h2>
        <button type="button" class="bg-yellow-500 hover:bg-yellow-600 text-black px-4 py-2 rounded-lg font-semibold">Add New Customer</button>
      </div>
      <div class="overflow-x-auto">
        <table class="w-full text-white">
          <thead>
            <tr class="border-b border-white/20">
              <th class="text-left py-3 px-4">Name</th>
              <th class="text-left py-3 px-4">Phone</th>
              <th class="text-left py-3 px-4">Email</th>
              <th class="text-left py-3 px-4">Type</th>
              <th class="text-left py-3 px-4">KYC Status</th>
              <th class="text-left py-3 px-4">Actions</th>
            </tr>
          </thead>
          <tbody>
{rows}          </tbody>
        </table>
      </div>
    </div>
  </div>
</div>"#,
        count = customers.len(),
    )
}
