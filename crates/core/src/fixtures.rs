//! Restaurant fixtures shared by the unit tests

use std::borrow::Borrow;

use crate::restaurant::{Cuisine, Restaurant};

pub fn restaurant(id: &str, name: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisines: None,
        is_open_now_for_delivery: None,
        is_new: None,
        delivery_cost: None,
        minimum_delivery_value: None,
        drive_distance_meters: None,
        rating: None,
        address: None,
        delivery_eta_minutes: None,
        logo_url: None,
    }
}

pub fn with_cuisines(mut restaurant: Restaurant, cuisines: &[(&str, &str)]) -> Restaurant {
    restaurant.cuisines = Some(
        cuisines
            .iter()
            .map(|(unique_name, name)| Cuisine {
                unique_name: unique_name.to_string(),
                name: name.to_string(),
            })
            .collect(),
    );
    restaurant
}

/// Pizza Palace, Sushi Station and Burger Barn
pub fn three_restaurants() -> Vec<Restaurant> {
    let mut pizza = with_cuisines(
        restaurant("1", "Pizza Palace"),
        &[("pizza", "Pizza"), ("italian", "Italian")],
    );
    pizza.is_open_now_for_delivery = Some(true);
    pizza.is_new = Some(false);
    pizza.delivery_cost = Some(2.5);
    pizza.minimum_delivery_value = Some(15.0);
    pizza.drive_distance_meters = Some(1500.0);

    let mut sushi = with_cuisines(
        restaurant("2", "Sushi Station"),
        &[("sushi", "Sushi"), ("japanese", "Japanese")],
    );
    sushi.is_open_now_for_delivery = Some(false);
    sushi.is_new = Some(true);
    sushi.delivery_cost = Some(0.0);
    sushi.minimum_delivery_value = Some(20.0);
    sushi.drive_distance_meters = Some(3000.0);

    let mut burger = with_cuisines(
        restaurant("3", "Burger Barn"),
        &[("burgers", "Burgers"), ("american", "American")],
    );
    burger.is_open_now_for_delivery = Some(true);
    burger.is_new = Some(true);
    burger.delivery_cost = Some(5.0);
    burger.minimum_delivery_value = Some(10.0);
    burger.drive_distance_meters = Some(500.0);

    vec![pizza, sushi, burger]
}

pub fn names<R: Borrow<Restaurant>>(restaurants: &[R]) -> Vec<&str> {
    restaurants
        .iter()
        .map(|r| {
            let r: &Restaurant = r.borrow();
            r.name.as_str()
        })
        .collect()
}
