//! Model payload fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

const AIRLINES: [&str; 5] = ["IndiGo", "Air India", "Vistara", "SpiceJet", "Akasa Air"];

pub fn flight_results(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            let airline = AIRLINES[i % AIRLINES.len()];
            json!({
                "airline": airline,
                "flightNumber": format!("6E {}", 2100 + i),
                "departure": "07:45",
                "arrival": "10:00",
                "duration": "2h 15m",
                "platform": "MakeMyTrip",
                "price": format!("₹{},250", 5 + i),
                "url": "https://www.makemytrip.com/flight/search"
            })
        })
        .collect();
    json!({ "results": results })
}

pub fn train_results(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "trainName": "Rajdhani Express",
                "trainNumber": format!("{}", 12951 + i),
                "departure": "16:55",
                "arrival": "08:35",
                "duration": "15h 40m",
                "platform": "IRCTC",
                "price": format!("₹{},105", 2 + i),
                "url": "https://www.irctc.co.in/nget/train-search"
            })
        })
        .collect();
    json!({ "results": results })
}

pub fn bus_results(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "operator": "KSRTC",
                "busType": "AC Sleeper",
                "departure": "21:30",
                "arrival": "06:15",
                "duration": "8h 45m",
                "platform": "redBus",
                "price": format!("₹{}50", 8 + i),
                "url": "https://www.redbus.in/bus-tickets"
            })
        })
        .collect();
    json!({ "results": results })
}

pub fn accommodation_results(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("Taj Malabar Resort {}", i + 1),
                "rating": 4.5,
                "imageUrl": "https://images.example.com/taj-malabar.jpg",
                "imageHint": "luxury hotel",
                "platforms": [
                    { "platform": "Booking.com", "price": "₹12,400", "url": "https://www.booking.com/hotel/in/taj-malabar.html" },
                    { "platform": "Agoda", "price": "₹11,950", "url": "https://www.agoda.com/taj-malabar" }
                ]
            })
        })
        .collect();
    json!({ "results": results })
}

pub fn location_details() -> Value {
    json!({
        "name": "Munnar",
        "description": "Hill station in the Western Ghats known for tea estates.",
        "heroImageHint": "tea plantation",
        "accommodations": [
            { "name": "Blanket Hotel", "price": "₹9,800", "platform": "MakeMyTrip", "rating": 4.6 }
        ],
        "weather": [
            { "day": "Today", "temp": "22°C", "condition": "Misty", "icon": "Cloud" },
            { "day": "Tomorrow", "temp": "24°C", "condition": "Sunny", "icon": "Sun" },
            { "day": "Day After", "temp": "19°C", "condition": "Showers", "icon": "CloudRain" }
        ],
        "news": [
            { "title": "Neelakurinji bloom expected", "source": "The Hindu", "url": "https://www.thehindu.com/news/munnar" }
        ],
        "touristPlaces": [
            { "name": "Eravikulam National Park", "imageHint": "mountain goats", "description": "Home of the Nilgiri tahr." }
        ]
    })
}
