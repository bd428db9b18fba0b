//! Decorative map panel with a grid, roads, and hospital pins.

use demo_data::builtin_map_pins;
use yew::prelude::*;

/// Map mockup component. Purely presentational; pins come from the
/// demo catalog and nothing tracks a real position.
#[function_component(MapMockup)]
pub fn map_mockup() -> Html {
    let pins = builtin_map_pins();

    html! {
        <div class="map-panel">
            <div class="map-grid">
                { for (1..=8u32).map(|i| {
                    let offset = f64::from(i) * 12.5;
                    html! {
                        <>
                            <div class="map-line-h" style={format!("top: {offset}%")}></div>
                            <div class="map-line-v" style={format!("left: {offset}%")}></div>
                        </>
                    }
                })}
            </div>

            <div class="map-road road-v" style="left: 50%"></div>
            <div class="map-road road-h" style="top: 50%"></div>
            <div class="map-road road-v faint" style="left: 25%"></div>
            <div class="map-road road-h faint" style="top: 33%"></div>

            <div class="user-dot" style="left: 48%; top: 48%"></div>

            { for pins.iter().map(|pin| {
                html! {
                    <div
                        class="map-pin"
                        key={pin.name.clone()}
                        style={format!("left: {}%; top: {}%", pin.x, pin.y)}
                    >
                        <span class="pin-glyph">{"📍"}</span>
                        <span class="pin-label">{ &pin.name }</span>
                    </div>
                }
            })}

            <div class="map-badge">
                <span>{"Live Tracking"}</span>
                <span class="live-dot"></span>
            </div>
        </div>
    }
}
