//! Prompt templates for every generation flow.
//!
//! Placeholders use the wire name of the flow input (`{{departureDate}}`).
//! The output JSON Schema is not part of the template; the runner sends it
//! alongside as the system instruction.

use super::FlowKind;

/// Returns the user prompt template for a flow.
pub fn template_for(kind: FlowKind) -> &'static str {
    match kind {
        FlowKind::Flights => COMPARE_FLIGHTS,
        FlowKind::Trains => COMPARE_TRAINS,
        FlowKind::Buses => COMPARE_BUSES,
        FlowKind::Accommodations => COMPARE_ACCOMMODATIONS,
        FlowKind::LocationDetails => LOCATION_DETAILS,
        FlowKind::Chat => MULTILINGUAL_CHAT,
        FlowKind::ReverseGeocode => REVERSE_GEOCODE,
        FlowKind::Itinerary => TRAVEL_ITINERARY,
    }
}

/// System instruction wrapping the output schema of a flow.
pub fn output_instruction(schema: &str) -> String {
    format!(
        "{}\n\n{}",
        OUTPUT_INSTRUCTION_PREAMBLE, schema
    )
}

const OUTPUT_INSTRUCTION_PREAMBLE: &str = r#"You are the data generation backend of a travel planning app.
Reply with exactly one JSON object and nothing else: no prose, no Markdown fences.
The object must validate against the following JSON Schema:"#;

// ============================================================================
// Price comparison
// ============================================================================

const COMPARE_FLIGHTS: &str = r#"You are a travel price comparison expert. A user is searching for flights from {{origin}} to {{destination}} on {{departureDate}}.

Generate a list of 5-10 realistic flight options. For some of the most popular flights, provide price comparisons from 2-3 different platforms (e.g., MakeMyTrip, Goibibo, EaseMyTrip, Skyscanner, or the airline's official site).

- Ensure prices are realistic for the route and are in Indian Rupees, written with the ₹ sign (e.g., ₹5,500).
- Provide a valid, but generic, booking URL for each platform.
- Use a mix of major Indian airlines like IndiGo, Vistara, Air India, etc."#;

const COMPARE_TRAINS: &str = r#"You are a travel price comparison expert. A user is searching for train tickets from {{origin}} to {{destination}} on {{journeyDate}}.

Generate a list of 5-10 realistic train options. For some of the most popular trains, provide price comparisons from 2-3 different platforms (e.g., IRCTC Official, MakeMyTrip, RailYatri, Confirmtkt).

- Ensure prices are realistic for the route and class (AC 3 Tier or similar) and are in Indian Rupees, written with the ₹ sign (e.g., ₹3,500).
- Provide a valid, but generic, booking URL for each platform.
- Use a mix of popular Indian train names like Rajdhani, Shatabdi, Duronto, etc., where appropriate for the route."#;

const COMPARE_BUSES: &str = r#"You are a travel price comparison expert. A user is searching for bus tickets from {{origin}} to {{destination}} on {{journeyDate}}.

Generate a list of 5-10 realistic bus options. For some of the most popular operators, provide price comparisons from 2-3 different platforms (e.g., RedBus, AbhiBus, Paytm, MakeMyTrip).

- Ensure prices are realistic for the route and are in Indian Rupees, written with the ₹ sign (e.g., ₹1,200).
- Provide a valid, but generic, booking URL for each platform.
- Create a variety of bus types (e.g., A/C Sleeper (2+1), Volvo A/C Seater) and operators."#;

const COMPARE_ACCOMMODATIONS: &str = r#"You are a travel price comparison expert. A user is searching for accommodations based on the term '{{searchTerm}}' from {{checkInDate}} to {{checkOutDate}}.

- If '{{searchTerm}}' seems to be a specific hotel name, find that hotel and generate price comparisons for it from 3-5 major platforms (e.g., Booking.com, Agoda, MakeMyTrip, Goibibo, Hotels.com).
- If '{{searchTerm}}' seems to be a city or location, generate a list of 5-10 realistic and popular hotel options in that area. For each hotel, provide price comparisons from 2-4 different platforms.

- Ensure prices are realistic per night for the location and are in Indian Rupees, written with the ₹ sign (e.g., ₹8,500).
- Ratings are user ratings between 1 and 5.
- Provide a valid, but generic, booking URL for each platform.
- Generate a realistic image URL from source.unsplash.com for each hotel, using search terms relevant to the hotel and its location (e.g., https://source.unsplash.com/800x600/?luxury-hotel-mumbai).
- Provide a short, two-word hint for the image."#;

// ============================================================================
// Destination content
// ============================================================================

const LOCATION_DETAILS: &str = r#"You are a travel expert specializing in destinations within India. Generate detailed travel information for the following location: {{location}}.

Provide a diverse and realistic set of data:
- a brief, engaging description and a two-word hero image hint;
- 3 diverse accommodation options with a starting price per night and a rating between 1 and 5;
- a 3-day weather forecast (Today, Tomorrow, and the day after);
- 3 recent news headlines with their source;
- 5 popular tourist places or landmarks.

All prices must be in Indian Rupees, written with the ₹ sign (e.g., ₹25,000).
For news URLs, provide realistic but fake URLs from major Indian news sources.
For accommodation platforms, use a variety of popular booking sites.
For weather icons, choose from 'Sun', 'Cloud', 'CloudRain'."#;

const TRAVEL_ITINERARY: &str = r#"You are an expert travel agent specializing in creating personalized travel itineraries for destinations within India.
You will use the location and preferences provided to create a detailed travel itinerary suggestion.
Ensure all mentioned costs or budget considerations are in Indian Rupees (Rs.).

Location: {{location}}
Preferences: {{preferences}}"#;

// ============================================================================
// Assistance
// ============================================================================

const MULTILINGUAL_CHAT: &str = r#"You are a multilingual travel support chatbot. A user will send you a message in their native language along with the language code.
Respond to the user in their native language, providing helpful and informative support related to travel.

User Message: {{userMessage}}
User Language: {{userLanguage}}"#;

const REVERSE_GEOCODE: &str = r#"You are a reverse geocoding service. Based on the provided latitude and longitude, provide a concise, human-readable place name for the location. This could be a well-known landmark, neighborhood, or city.

Latitude: {{latitude}}
Longitude: {{longitude}}

Return the most likely place name. For example, for latitude 28.6329 and longitude 77.2193, a good answer would be "Connaught Place, New Delhi". For latitude 19.0760 and longitude 72.8777, a good answer would be "Mumbai, Maharashtra"."#;
