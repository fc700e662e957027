//! # Optional Simulation Parameters
//!
//! The STILT/HYSPLIT settings a domain may override. None of them is
//! interpreted here: each slot is type-checked on input and forwarded to the
//! simulation engine only when set.
//!
//! See <https://uataq.github.io/stilt/#/configuration> for their meaning.

use serde::{Deserialize, Serialize};

macro_rules! simulation_parameters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        /// Optional engine parameters. Unset slots are left out of the payload.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct SimulationParameters {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $name: Option<$ty>,
            )*
        }

        /// Names of every recognized optional parameter.
        pub const PARAMETER_NAMES: &[&str] = &[$(stringify!($name)),*];

        impl SimulationParameters {
            /// Number of parameters explicitly set.
            pub fn set_count(&self) -> usize {
                0 $(+ usize::from(self.$name.is_some()))*
            }

            /// Names of the parameters explicitly set, in declaration order.
            pub fn set_names(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$name.is_some() {
                        names.push(stringify!($name));
                    }
                )*
                names
            }
        }
    };
}

simulation_parameters! {
    capemin: f64,
    cmass: f64,
    conage: f64,
    cpack: f64,
    dxf: f64,
    dyf: f64,
    dzf: f64,
    efile: String,
    emisshrs: f64,
    frhmax: f64,
    frhs: f64,
    frme: f64,
    frmr: f64,
    frts: f64,
    frvs: f64,
    hnf_plume: bool,
    horcoruverr: f64,
    horcorzierr: f64,
    hscale: f64,
    ichem: f64,
    idsp: f64,
    initd: f64,
    k10m: f64,
    kagl: f64,
    kbls: f64,
    kblt: f64,
    kdef: f64,
    khinp: f64,
    khmax: f64,
    kmix0: f64,
    kmixd: f64,
    kmsl: f64,
    kpuff: f64,
    krand: f64,
    krnd: f64,
    kspl: f64,
    kwet: f64,
    kzmix: f64,
    maxdim: f64,
    maxpar: f64,
    mgmin: f64,
    n_met_min: f64,
    ncycl: f64,
    ndump: f64,
    ninit: f64,
    nstr: f64,
    nturb: f64,
    numpar: i64,
    nver: f64,
    outdt: f64,
    outfrac: f64,
    p10f: f64,
    pinbc: String,
    pinpf: String,
    poutf: String,
    projection: String,
    qcycle: f64,
    random: f64,
    rhb: f64,
    rht: f64,
    rm_dat: bool,
    siguverr: f64,
    sigzierr: f64,
    simulation_id: String,
    smooth_factor: f64,
    splitf: f64,
    tkerd: f64,
    tkern: f64,
    tlfrac: f64,
    tluverr: f64,
    tlzierr: f64,
    tout: f64,
    tratio: f64,
    tvmix: f64,
    varsiwant: String,
    veght: f64,
    vscale: f64,
    vscaleu: f64,
    vscales: f64,
    w_option: f64,
    wbbh: f64,
    wbwf: f64,
    wbwr: f64,
    wvert: bool,
    zicontroltf: f64,
    ziscale: f64,
    z_top: f64,
    zcoruverr: f64,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
