//! the fixed set of NVDB attribute column names the tag mapper consults
//! (§6). unrecognized columns are ignored; this module is the single
//! source of truth for every recognized name so a reviewer can see, in one
//! place, exactly what the mapper reads.

// administrative / join key (not emitted as tags). ROUTE_ID and FROM_MEASURE
// are consulted by Segment for the core's own ordering/joining logic;
// Kommu_141 is the external driver's partitioning key (§5) and is never
// read inside this crate — it's named here only so the recognized column
// set matches §6's table in full.
pub const ROUTE_ID: &str = "ROUTE_ID";
pub const FROM_MEASURE: &str = "FROM_MEASURE";
pub const KOMMU_141: &str = "Kommu_141";

// highway classification
pub const MOTORVAG: &str = "Motorvag";
pub const MOTORTRAFIKLED: &str = "Motortrafikled";
pub const KLASS_181: &str = "Klass_181";
pub const VAGTY_41: &str = "Vagty_41";
pub const KATEG_380: &str = "Kateg_380";

// link detection
pub const LEVER_292: &str = "Lever_292";
pub const FPV_K_309: &str = "FPV_k_309";

// speed
pub const F_HOGST_225: &str = "F_Hogst_225";
pub const B_HOGST_225: &str = "B_Hogst_225";
pub const HOGST_36: &str = "Hogst_36";

// weight / size restrictions
pub const HOGST_46: &str = "Hogst_46";
pub const HOGST_55_30: &str = "Hogst_55_30";
pub const F_HOGST_24: &str = "F_Hogst_24";
pub const B_HOGST_24: &str = "B_Hogst_24";
pub const FRI_H_143: &str = "Fri_h_143";
pub const BREDD_156: &str = "Bredd_156";

// access / direction
pub const F_FORBJUDEN_FARDRIKTNING: &str = "F_ForbjudenFardriktning";
pub const B_FORBJUDEN_FARDRIKTNING: &str = "B_ForbjudenFardriktning";
pub const F_FORBUD_TRAFIK: &str = "F_ForbudTrafik";
pub const B_FORBUD_TRAFIK: &str = "B_ForbudTrafik";
pub const F_GALLAR_135: &str = "F_Gallar_135";
pub const B_GALLAR_135: &str = "B_Gallar_135";

// lanes
pub const KORFA_497: &str = "Korfa_497";
pub const F_KORFA_517: &str = "F_Korfa_517";
pub const B_KORFA_517: &str = "B_Korfa_517";

// structures (bridge / tunnel)
pub const KONST_190: &str = "Konst_190";
pub const NAMN_193: &str = "Namn_193";
pub const IDENT_191: &str = "Ident_191";

// names / refs
pub const NAMN_130: &str = "Namn_130";
pub const VAGNR_10370: &str = "Vagnr_10370";
pub const EVAG_555: &str = "Evag_555";
pub const LAN_558: &str = "Lan_558";

// surface
pub const SLITL_152: &str = "Slitl_152";

// cycle / pedestrian
pub const L_GAGATA: &str = "L_Gagata";
pub const R_GAGATA: &str = "R_Gagata";
pub const GCM_T_502: &str = "GCM_t_502";
pub const C_CYKELLED: &str = "C_Cykelled";
pub const GCM_BELYST: &str = "GCM_belyst";

// ferry
pub const FARJELED: &str = "Farjeled";
pub const FARJE_139: &str = "Farje_139";

// roundabout / environmental zone / lighting
pub const CIRKULATIONSPLATS: &str = "Cirkulationsplats";
pub const MILJOZON_KLASS: &str = "Miljozon_klass";
