/// Immutable descriptor for one carousel entry.
///
/// Created once at startup from the static list below and never mutated.
/// `model_path` is the asset reference an external model loader would
/// consume; the built-in renderer draws a tinted procedural impostor
/// instead, so loading failures cannot originate here.
#[derive(Clone, Copy, Debug)]
pub struct PlanetConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub model_path: &'static str,
    /// Intrinsic size factor normalizing the source asset to `visual_radius`.
    pub size: f32,
    pub description: &'static str,
    /// Nominal on-screen radius used by the focus-scale formula.
    pub visual_radius: f32,
    /// Impostor tint (linear RGB).
    pub color_rgb: [f32; 3],
}

pub const PLANETS: &[PlanetConfig] = &[
    PlanetConfig {
        id: "client",
        name: "Client",
        model_path: "planet_client.glb",
        size: 0.5,
        description: "The part users interact with directly, it displays data \
                      and sends user actions to the server.",
        visual_radius: 0.75,
        color_rgb: [0.3, 0.5, 0.9],
    },
    PlanetConfig {
        id: "api",
        name: "API",
        model_path: "planet_api.glb",
        size: 0.0035,
        description: "The part that handles requests and responses between the \
                      client and server.",
        visual_radius: 0.75,
        color_rgb: [0.3, 0.9, 0.4],
    },
    PlanetConfig {
        id: "server",
        name: "Server",
        model_path: "planet_server.glb",
        size: 0.11,
        description: "The part that manages data storage, processing, and \
                      business logic.",
        visual_radius: 0.75,
        color_rgb: [0.9, 0.3, 0.3],
    },
];
