//! HTML rendering for each page.
//!
//! Every view model from `core` implements [`Template`]. All car text is escaped
//! before it reaches the markup.

use crate::{
    core::{
        listing::CarListing, moderation::PendingCars, pagination::Page, search::SearchResults,
    },
    entities::car,
    web::APPROVE_CARS_PATH,
};
use axum::http::StatusCode;
use std::fmt::Display;

/// A view model that renders to a full HTML document.
pub trait Template {
    /// Renders the document
    fn render(&self) -> String;
}

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Car Listings</title>\n</head>\n<body>\n\
         <nav><a href=\"/cars\">Cars</a> <a href=\"/search\">Search</a></nav>\n\
         <main>\n<h1>{title}</h1>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn price(value: f64) -> String {
    format!("${value:.2}")
}

fn select<T: Display>(name: &str, label: &str, options: &[T]) -> String {
    let mut html = format!(
        "<label>{label} <select name=\"{name}\">\n<option value=\"\">Any</option>\n"
    );
    for option in options {
        let value = escape(&option.to_string());
        html.push_str(&format!("<option value=\"{value}\">{value}</option>\n"));
    }
    html.push_str("</select></label>\n");
    html
}

fn search_form(
    model_search: &[String],
    city_search: &[String],
    year_search: &[i32],
    body_style_search: &[String],
) -> String {
    let mut html = String::from("<form class=\"search\" method=\"get\" action=\"/search\">\n");
    html.push_str("<label>Keyword <input type=\"text\" name=\"keyword\"></label>\n");
    html.push_str(&select("model", "Model", model_search));
    html.push_str(&select("city", "City", city_search));
    html.push_str(&select("year", "Year", year_search));
    html.push_str(&select("body_style", "Body style", body_style_search));
    html.push_str("<label>Min price <input type=\"number\" name=\"min_price\"></label>\n");
    html.push_str("<label>Max price <input type=\"number\" name=\"max_price\"></label>\n");
    html.push_str("<button type=\"submit\">Search</button>\n</form>\n");
    html
}

/// Display-only list; the search has no transmission filter.
fn available_transmissions(transmissions: &[String]) -> String {
    if transmissions.is_empty() {
        return String::new();
    }
    let names: Vec<String> = transmissions.iter().map(|t| escape(t)).collect();
    format!(
        "<p class=\"transmissions\">Transmissions listed: {}</p>\n",
        names.join(", ")
    )
}

fn car_card(car: &car::Model) -> String {
    format!(
        "<li class=\"car\"><a href=\"/cars/{id}\">{year} {model}</a> \
         <span class=\"city\">{city}</span> <span class=\"price\">{price}</span></li>\n",
        id = car.id,
        year = car.year,
        model = escape(&car.model),
        city = escape(&car.city),
        price = price(car.price),
    )
}

fn car_list(cars: &[car::Model], empty_message: &str) -> String {
    if cars.is_empty() {
        return format!("<p class=\"empty\">{}</p>\n", escape(empty_message));
    }
    let mut html = String::from("<ul class=\"cars\">\n");
    for car in cars {
        html.push_str(&car_card(car));
    }
    html.push_str("</ul>\n");
    html
}

fn pagination_nav<T>(page: &Page<T>) -> String {
    let mut html = String::from("<nav class=\"pagination\">\n");
    if let Some(previous) = page.previous_page_number() {
        html.push_str("<a href=\"/cars?page=1\">First</a>\n");
        html.push_str(&format!("<a href=\"/cars?page={previous}\">Previous</a>\n"));
    }
    for number in 1..=page.num_pages {
        if number == page.number {
            html.push_str(&format!("<span class=\"current\">{number}</span>\n"));
        } else {
            html.push_str(&format!("<a href=\"/cars?page={number}\">{number}</a>\n"));
        }
    }
    if let Some(next) = page.next_page_number() {
        html.push_str(&format!("<a href=\"/cars?page={next}\">Next</a>\n"));
        html.push_str(&format!(
            "<a href=\"/cars?page={}\">Last</a>\n",
            page.num_pages
        ));
    }
    html.push_str("</nav>\n");
    html
}

impl Template for CarListing {
    fn render(&self) -> String {
        let mut body = search_form(
            &self.model_search,
            &self.city_search,
            &self.year_search,
            &self.body_style_search,
        );
        body.push_str(&format!(
            "<p class=\"summary\">Showing {}-{} of {} cars</p>\n",
            self.cars.start_index(),
            self.cars.end_index(),
            self.cars.total_items
        ));
        body.push_str(&car_list(&self.cars.items, "No cars listed yet."));
        body.push_str(&pagination_nav(&self.cars));
        layout("Cars", &body)
    }
}

/// Detail page for one listing.
#[derive(Debug)]
pub struct CarDetail {
    /// The listing shown
    pub single_car: car::Model,
}

impl Template for CarDetail {
    fn render(&self) -> String {
        let car = &self.single_car;
        let title = format!("{} {}", car.year, car.model);
        let body = format!(
            "<dl class=\"car-detail\">\n\
             <dt>Model</dt><dd>{model}</dd>\n\
             <dt>City</dt><dd>{city}</dd>\n\
             <dt>Year</dt><dd>{year}</dd>\n\
             <dt>Body style</dt><dd>{body_style}</dd>\n\
             <dt>Transmission</dt><dd>{transmission}</dd>\n\
             <dt>Price</dt><dd>{price}</dd>\n\
             <dt>Status</dt><dd>{status}</dd>\n\
             <dt>Listed</dt><dd>{created}</dd>\n\
             </dl>\n<p class=\"description\">{description}</p>\n",
            model = escape(&car.model),
            city = escape(&car.city),
            year = car.year,
            body_style = escape(&car.body_style),
            transmission = escape(&car.transmission),
            price = price(car.price),
            status = car.status,
            created = car.created_date.format("%Y-%m-%d %H:%M"),
            description = escape(&car.description),
        );
        layout(&title, &body)
    }
}

impl Template for SearchResults {
    fn render(&self) -> String {
        let mut body = search_form(
            &self.model_search,
            &self.city_search,
            &self.year_search,
            &self.body_style_search,
        );
        body.push_str(&available_transmissions(&self.transmission_search));
        body.push_str(&format!(
            "<p class=\"summary\">{} cars found</p>\n",
            self.cars.len()
        ));
        body.push_str(&car_list(&self.cars, "No cars match your search."));
        layout("Search", &body)
    }
}

impl Template for PendingCars {
    fn render(&self) -> String {
        if self.pending_cars.is_empty() {
            return layout(
                "Approve cars",
                "<p class=\"empty\">No cars are waiting for approval.</p>\n",
            );
        }
        let mut body = String::from(
            "<table class=\"pending\">\n<tr><th>Car</th><th>City</th><th>Price</th>\
             <th>Description</th><th></th></tr>\n",
        );
        for car in &self.pending_cars {
            body.push_str(&format!(
                "<tr><td><a href=\"/cars/{id}\">{year} {model}</a></td><td>{city}</td>\
                 <td>{price}</td><td>{description}</td><td>\
                 <form method=\"post\" action=\"{action}\">\
                 <input type=\"hidden\" name=\"car_id\" value=\"{id}\">\
                 <button type=\"submit\" name=\"action\" value=\"approve\">Approve</button>\
                 <button type=\"submit\" name=\"action\" value=\"reject\">Reject</button>\
                 </form></td></tr>\n",
                id = car.id,
                year = car.year,
                model = escape(&car.model),
                city = escape(&car.city),
                price = price(car.price),
                description = escape(&car.description),
                action = APPROVE_CARS_PATH,
            ));
        }
        body.push_str("</table>\n");
        layout("Approve cars", &body)
    }
}

/// Page shown for any error response.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            "<p class=\"error\">{}</p>\n<p><a href=\"/cars\">Back to listings</a></p>\n",
            escape(message)
        ),
    )
}
