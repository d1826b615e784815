//! # HTTP Routes
//!
//! Route registration for the REST API.
//!
//! ```text
//! /api/products                GET search · POST create
//! /api/products/{id}           GET read · DELETE remove
//! /api/products/{id}/add       PATCH increase quantity
//! /api/products/{id}/remove    PATCH decrease quantity
//! /api/users                   GET filter · POST create
//! /api/users/{id}              GET read · DELETE remove
//! /api/users/{id}/products     GET list · PUT replace by product ids
//! ```

mod products;
mod users;

use actix_web::web;

/// Registers every API route on the service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(products::search_products)
        .service(products::create_product)
        .service(products::get_product)
        .service(products::delete_product)
        .service(products::add_product_quantity)
        .service(products::remove_product_quantity)
        .service(users::get_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::delete_user)
        .service(users::get_user_products)
        .service(users::set_user_products);
}
