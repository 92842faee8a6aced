//! Hospital survey schema: every canonical short name with the raw header
//! strings observed for it across feed revisions.
//!
//! Alias lists are verbatim survey exports, typos and trailing spaces
//! included. The first alias is the preferred display name.

use surgecap_model::CanonicalField;

pub(crate) const HOSPITAL_FIELDS: &[CanonicalField] = &[
    CanonicalField {
        short_name: "hospitalname",
        aliases: &[
            "HospitalName",
            "hospitalName",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitalstreetaddress",
        aliases: &[
            "HospitalStreetAddress",
            "hospitalStreetAddress",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitalcity",
        aliases: &[
            "HospitalCity",
            "hospitalCity",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitalstate",
        aliases: &[
            "HospitalState",
            "hospitalState",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitalzip",
        aliases: &[
            "HospitalZip",
            "hospitalZip",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitallatitude",
        aliases: &[
            "HospitalLatitude",
            "hospitalLatitude",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitallongitude",
        aliases: &[
            "HospitalLongitude",
            "hospitalLongitude",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "hospitalcounty",
        aliases: &["HospitalCounty"],
        is_public: true,
    },
    CanonicalField {
        short_name: "numicubeds",
        aliases: &["Available Beds-Adult Intensive Care Unit (ICU) Staffed Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "icuavail",
        aliases: &["Available Beds-Adult Intensive Care Unit (ICU) Current Available"],
        is_public: true,
    },
    CanonicalField {
        short_name: "icu24h",
        aliases: &["Available Beds-Adult Intensive Care Unit (ICU) 24hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "icu72h",
        aliases: &["Available Beds-Adult Intensive Care Unit (ICU) 72hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "medsurgstaff",
        aliases: &["Available Beds-Medical and Surgical (Med/Surg) Staffed Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "medsurgavail",
        aliases: &["Available Beds-Medical and Surgical (Med/Surg) Current Available"],
        is_public: true,
    },
    CanonicalField {
        short_name: "medsurg24h",
        aliases: &["Available Beds-Medical and Surgical (Med/Surg) 24hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "medsurg72h",
        aliases: &["Available Beds-Medical and Surgical (Med/Surg) 72hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "burnstaff",
        aliases: &["Available Beds-Burn Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnavail",
        aliases: &["Available Beds-Burn Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burn24h",
        aliases: &["Available Beds-Burn 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burn72h",
        aliases: &["Available Beds-Burn 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "picstaff",
        aliases: &["Available Beds-Pediatric Intensive Care Staffed Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "picavail",
        aliases: &["Available Beds-Pediatric Intensive Care Current Available"],
        is_public: true,
    },
    CanonicalField {
        short_name: "pic24h",
        aliases: &["Available Beds-Pediatric Intensive Care 24hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "pic72h",
        aliases: &["Available Beds-Pediatric Intensive Care 72hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "pedstaff",
        aliases: &["Available Beds-Pediatric Staffed Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "pedavail",
        aliases: &["Available Beds-Pediatric Current Available"],
        is_public: true,
    },
    CanonicalField {
        short_name: "ped24h",
        aliases: &["Available Beds-Pediatric 24hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "ped72h",
        aliases: &["Available Beds-Pediatric 72hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "nicustaff",
        aliases: &["Available Beds-Neonatal Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nicuavail",
        aliases: &["Available Beds-Neonatal Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nicu24h",
        aliases: &["Available Beds-Neonatal 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nicu72h",
        aliases: &["Available Beds-Neonatal 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rehabstaff",
        aliases: &["Available Beds-Inpatient Rehab Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rehabavail",
        aliases: &["Available Beds-Inpatient Rehab Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rehab24h",
        aliases: &["Available Beds-Inpatient Rehab 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rehab72h",
        aliases: &["Available Beds-Inpatient Rehab 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychstaff",
        aliases: &["Psych Beds-Psychiatric Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychavail",
        aliases: &["Psych Beds-Psychiatric Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psych24h",
        aliases: &["Psych Beds-Psychiatric 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psych72h",
        aliases: &["Psych Beds-Psychiatric 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadultstaff",
        aliases: &["Psych Beds-Adult Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadultavail",
        aliases: &["Psych Beds-Adult Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadult24h",
        aliases: &["Psych Beds-Adult 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadult72h",
        aliases: &["Psych Beds-Adult 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadolstaff",
        aliases: &["Psych Beds-Adolescent Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadolavail",
        aliases: &["Psych Beds-Adolescent Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadol24h",
        aliases: &["Psych Beds-Adolescent 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychadol72h",
        aliases: &["Psych Beds-Adolescent 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychgeristaff",
        aliases: &["Psych Beds-Geriatric Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychgeriavail",
        aliases: &["Psych Beds-Geriatric Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychgeri24h",
        aliases: &["Psych Beds-Geriatric 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychgeri72h",
        aliases: &["Psych Beds-Geriatric 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychmeddetoxstaff",
        aliases: &["Psych Beds-Medical Detox Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychmeddetoxavail",
        aliases: &["Psych Beds-Medical Detox Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychmeddetox24h",
        aliases: &["Psych Beds-Medical Detox 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychmeddetox72h",
        aliases: &["Psych Beds-Medical Detox 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychsaddstaff",
        aliases: &["Psych Beds-Substance Abuse (Dual Diagnosis) Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychsaddavail",
        aliases: &["Psych Beds-Substance Abuse (Dual Diagnosis) Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychsadd24h",
        aliases: &["Psych Beds-Substance Abuse (Dual Diagnosis) 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "psychsadd72h",
        aliases: &["Psych Beds-Substance Abuse (Dual Diagnosis) 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "labordelivstaff",
        aliases: &["Other Beds-Labor / Delivery Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "labordelivavail",
        aliases: &["Other Beds-Labor / Delivery Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "labordeliv24h",
        aliases: &["Other Beds-Labor / Delivery 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "labordeliv72h",
        aliases: &["Other Beds-Labor / Delivery 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "maternitystaff",
        aliases: &["Other Beds-Maternity / Newborn Nursery Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "maternityavail",
        aliases: &["Other Beds-Maternity / Newborn Nursery Current Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "maternity24h",
        aliases: &["Other Beds-Maternity / Newborn Nursery 24hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "maternity72h",
        aliases: &["Other Beds-Maternity / Newborn Nursery 72hr Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiistaff",
        aliases: &["Other Beds-Airborne Infection Isolation Staffed Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "aiiavail",
        aliases: &["Other Beds-Airborne Infection Isolation Current Available"],
        is_public: true,
    },
    CanonicalField {
        short_name: "aii24h",
        aliases: &["Other Beds-Airborne Infection Isolation 24hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "aii72h",
        aliases: &["Other Beds-Airborne Infection Isolation 72hr Beds"],
        is_public: true,
    },
    CanonicalField {
        short_name: "edimmediate",
        aliases: &["Emergency Department-ED Available Capacity Immediate"],
        is_public: false,
    },
    CanonicalField {
        short_name: "eddelayed",
        aliases: &["Emergency Department-ED Available Capacity Delayed"],
        is_public: false,
    },
    CanonicalField {
        short_name: "edminor",
        aliases: &["Emergency Department-ED Available Capacity Minor"],
        is_public: false,
    },
    CanonicalField {
        short_name: "eddeceased",
        aliases: &["Emergency Department-ED Available Capacity Deceased"],
        is_public: false,
    },
    CanonicalField {
        short_name: "noncvd19pntadmit",
        aliases: &[
            "Admission Data-Number of Patients awaiting admission Non COVID-19 Response ?",
            "Admission Data-Number of Patients awaiting admission Response ?",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "cvd19pntadmitnonvent",
        aliases: &[
            "Admission Data-Number of Patients awaiting admission with Confirmed or PUI COVID-19 non-ventilated Response ?",
            "Admission Data-Number of Patients awaiting admission with Confirmed or PUI COVID19 non-ventilated Response ?",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "cvd19pntadmitnvent",
        aliases: &[
            "Admission Data-Number of Patients awaiting admission for Confirmed or PUI COVID-19 on ventilator Response ?",
            "Admission Data-Number of Patients awaiting admission for Confirmed or PUI COVID 19 on ventilator Response ?",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "pntadmiticu",
        aliases: &["Admission Data-Number of Patients awaiting ICU Bed Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "pntdischrg",
        aliases: &["Admission Data-Number of Patients awaiting discharge placement Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "facrespplan",
        aliases: &["EEIs-Does your facility have an established respiratory protection plan? Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95fittested",
        aliases: &["EEIs-Is your facility planning to use N95 masks. If so is your staff fit-tested to wear N95 masks? Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "modelsfittested",
        aliases: &["EEIs-What mask brands and models are staff fit tested to use? Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "paprtrained",
        aliases: &["EEIs-Is your facility planning to use PAPRs. If so is your staff trained to use PAPRs? Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppedondoff",
        aliases: &["EEIs-Is your staff adequately trained in correctly donning and doffing of PPE? Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needsanitizer",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Alcohol Based Hand Sanitizer Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needhandsoap",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Hand Soap Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needsolution",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Disinfection Solutions Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needwipes",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Disinfection Wipes Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needgloves",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Gloves Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needother1",
        aliases: &["Is there an immediate need for hand hygiene/disinfection supplies listed below?-Other (please specify) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needn95",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-N95's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needpapr",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-PAPR's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needpaprhoods",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-PAPR's Hoods Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needpaprfilters",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-PAPR's Filters Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needmasks",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-Facial Masks (Procedural/Surgical) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needgown",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-Gown/Apron Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needeyepro",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-Eye Protection (Goggles Face shield) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needcleaning",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-Cleaning/Disinfection Supplies Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "needother2",
        aliases: &["Does your facility anticipate material/supply shortages of the following?-Other (please specify) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortn95",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-N95's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortpapr",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-PAPR's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortpaprhoods",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-PAPR's Hoods Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortpaprfilters",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-PAPR's Filters Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortmasks",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Facial Masks (Procedural/Surgical) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortgowns",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Gowns Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shorteyepro",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Eye Protection (Goggles Face shield) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortsoap",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Hand Soap Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortsanitizer",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Hand Sanitizer Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortcleaning",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Cleaning/Disinfection Supplies Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortother1",
        aliases: &["If you have a COVID-19 resident(s) Do you anticipate shortages of the below:-Other (please specify) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnn95",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-N95's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnpapr",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-PAPR's Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnpaprhoods",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-PAPR's Hoods Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnpaprfilter",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-PAPR's Filters Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burnmask",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-Facial Masks (Procedural/Surgical) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burngowns",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-Gowns Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "burneyepro",
        aliases: &["Current Burn Rates per day for the following PPE (Single Units):-Eye Protection (Goggles Face shield) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortcollection",
        aliases: &["Testing Supplies-What diagnostic testing or specimen collection supplies do you anticipate a shortage of? "],
        is_public: false,
    },
    CanonicalField {
        short_name: "shortother2",
        aliases: &["Testing Supplies-Other (please specify) "],
        is_public: false,
    },
    CanonicalField {
        short_name: "testlocal",
        aliases: &["Local Testing-Do you have a commercial or inhouse platform for performing local testing of COVID-19? "],
        is_public: false,
    },
    CanonicalField {
        short_name: "date",
        aliases: &["Local Testing-Real or future go-live date: "],
        is_public: false,
    },
    CanonicalField {
        short_name: "cvd19tstrun",
        aliases: &[
            "Local Testing-How many COVID-19 tests were run at your inhouse lab today? ",
            "How many COVID-19 tests were run at your inhouse lab today? ",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "cvd19tstpostve",
        aliases: &[
            "Local Testing-How many of those inhouse tests were positive? ",
            "How many of those inhouse tests were positive? ",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "numc19hosppats",
        aliases: &[
            "COVID-19 Patient Counts-Total number of inpatients diagnosed with COVID-19: ",
            "COVID-19 Patient Counts-Total number of inpatients diagnosed with COVID-19:",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlcvd19pui",
        aliases: &[
            "COVID-19 Patient Counts-Total number of inpatients under suspicion for COVID-19 (PUI): ",
            "COVID-19 Patient Counts-Total number of inpatients under suspicion for COVID-19 (PUI):",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlnumicubedscvd19",
        aliases: &[
            "COVID-19 Patient Counts - Total number of ICU beds occupied by a diagnosed COVID-19 patient:",
            "COVID-19 Patient Counts-Total number of ICU beds occupied by a diagnosed COVID-19 patient: ",
            "COVID-19 Patient Counts-Total number of ICU beds occupied by a diagnosed COVID-19 patient:",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "cvdnumc19hopats",
        aliases: &[
            "COVID-19 Patient Counts-Total number of inpatients admitted 14+ days for other conditions now PUI or confirmed COVID-19?: ",
            "COVID-19 Patient Counts-Total number of inpatients admitted 14+ days for other conditions now PUI or confirmed COVID-19?:",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "numc19mechventpats",
        aliases: &[
            "COVID-19 Patient Counts-Total number of inpatients diagnosed with COVID-19 on ventilators: ",
            "COVID-19 Patient Counts-Total number of patients diagnosed with COVID-19 on ventilators: ",
            "COVID-19 Patient Counts-Total number of patients diagnosed with COVID-19 on ventilators:",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlcvd19ptntecmo",
        aliases: &[
            "COVID-19 Patient Counts-Total number of inpatients diagnosed with COVID-19 on ECMO: ",
            "COVID-19 Patient Counts-Total number of patients diagnosed with COVID-19 on ECMO: ",
            "COVID-19 Patient Counts-Total number of patients diagnosed with COVID-19 on ECMO:",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlaiied",
        aliases: &[
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in your ED? ",
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in your ED?",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlaiiicu",
        aliases: &[
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in your ICU? ",
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in your ICU?",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "ttlaiinonicu",
        aliases: &[
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in non-ICU? ",
            "COVID-19 Patient Counts-How many airborne infection isolation rooms are in non-ICU?",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "cvdnumc19died",
        aliases: &[
            "COVID-19 Patient Counts-Number of patient deaths with Confirmed or PUI for COVID-19 in last 24 hours: ",
            "COVID-19 Patient Counts-Number of patient deaths with Confirmed or PUI for COVID 19 in last 24 hours: ",
            "COVID-19 Patient Counts-Number of patient deaths with Confirmed or PUI for COVID 19 in last 24 hours:",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "conspperesp",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Extended use of respirators Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppereuseresp",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Use of reusable respirators in place of disposable N95s (i.e. PAPRs elastomeric N95s etc.) Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppedispon95",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Reuse of disposable N95 respirators Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppestaffhours",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Extended staff hours/shifts Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppecohortwodestaff",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Cohorting patients without dedicated staff Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppecohortwdestaff",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Cohorting patients with dedicated staff Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95utli3less",
        aliases: &["At current utilization rates how long do you expect your current supply of N95 respirators to last at your facility?-3 or less days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95utli47",
        aliases: &["At current utilization rates how long do you expect your current supply of N95 respirators to last at your facility?-4-7 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95util814",
        aliases: &["At current utilization rates how long do you expect your current supply of N95 respirators to last at your facility?-8-14 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95util1528",
        aliases: &["At current utilization rates how long do you expect your current supply of N95 respirators to last at your facility?-15-28 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "n95util29more",
        aliases: &["At current utilization rates how long do you expect your current supply of N95 respirators to last at your facility?-29 or more days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppeutli3less",
        aliases: &["At current utilization rates how long do you expect your current supply of other PPE (gowns gloves etc) to last at your facility?-3 or less days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppeutli47",
        aliases: &["At current utilization rates how long do you expect your current supply of other PPE (gowns gloves etc) to last at your facility?-4-7 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppeutil814",
        aliases: &["At current utilization rates how long do you expect your current supply of other PPE (gowns gloves etc) to last at your facility?-8-14 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppeutil1528",
        aliases: &["At current utilization rates how long do you expect your current supply of other PPE (gowns gloves etc) to last at your facility?-15-28 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ppeutil29more",
        aliases: &["At current utilization rates how long do you expect your current supply of other PPE (gowns gloves etc) to last at your facility?-29 or more days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nputli3less",
        aliases: &["At current utilization rates how long do you expect your current supply of NP specimen collection supplies to last at your facility?-3 or less days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nputli47",
        aliases: &["At current utilization rates how long do you expect your current supply of NP specimen collection supplies to last at your facility?-4-7 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nputil814",
        aliases: &["At current utilization rates how long do you expect your current supply of NP specimen collection supplies to last at your facility?-8-14 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nputil1528",
        aliases: &["At current utilization rates how long do you expect your current supply of NP specimen collection supplies to last at your facility?-15-28 days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "nputil29more",
        aliases: &["At current utilization rates how long do you expect your current supply of NP specimen collection supplies to last at your facility?-29 or more days Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlempcall",
        aliases: &["Employee Status-Total Employee Call Outs/Absenteeism "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlempcvd19",
        aliases: &["Employee Status-Call out reason: sick with COVID-19 "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlcalloutphys",
        aliases: &["Employee Status-Number of Call Outs that are Physicians "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlcalloutnurse",
        aliases: &["Employee Status-Number of Call Outs that are Nurses "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlcalloutisolation",
        aliases: &["Employee Status-Call out reason: quarantine or isolation due to exposure "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlcalloutchildcare",
        aliases: &["Employee Status-Call out reason: child care issues "],
        is_public: false,
    },
    CanonicalField {
        short_name: "envrnmntlsrvcsday",
        aliases: &[
            "Critical Staffing Shortages Today?-Environmental Services Response ?",
            "Todays Critical Staffing Shortages - Environmental Services",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "rnlpnday",
        aliases: &[
            "Critical Staffing Shortages Today?-Nurses: RN and LPNs Response ?",
            "Todays Critical Staffing Shortages -Nurses: RN and LPNs",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "rsprtrythrpstday",
        aliases: &[
            "Critical Staffing Shortages Today?-Respritory Therapists Response ?",
            "Todays Critical Staffing Shortages -Respritory Therapists",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "phtmcstday",
        aliases: &[
            "Critical Staffing Shortages Today?-Pharmacists and Pharmacy Techs Response ?",
            "Todays Critical Staffing Shortages -Pharmacists and Pharmacy Techs",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "physcnstday",
        aliases: &[
            "Critical Staffing Shortages Today?-Physicans: Attending Fellows Response ?",
            "Todays Critical Staffing Shortages -Physicans: Attending, Fellows",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherindpendtday",
        aliases: &[
            "Critical Staffing Shortages Today?-Other licensed independent practitioners: Advanced Practice Nurses Physician Assistances Response ?",
            "Todays Critical Staffing Shortages -Other licensed independent practitioners: Advanced Practice Nurses, Physician Assistances",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "tempday",
        aliases: &[
            "Critical Staffing Shortages Today?-Temporary physicians nurse etc (per diems travelers retired seasonal) Response ?",
            "Todays Critical Staffing Shortages -Temporary physicians, nurse, etc (per diems, travelers, retired, seasonal)",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherhcpday",
        aliases: &[
            "Critical Staffing Shortages Today?-Other HCP Personnel (Other persons who work in the facilities not detailed above Response ?",
            "Todays Critical Staffing Shortages -Other HCP Personnel (Other persons who work in the facilities not detailed above",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherhcpdaylist",
        aliases: &[
            "Critical Staffing Shortages Today?-What other HCP Personnel not listed above do you have a critical staff shortage of? Response ?",
            "Todays Critical Staffing Shortages -What other HCP Personnel not listed above do you have a critical staff shortage of? ",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "envrnmntlsrvcsweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Environmental Services Response ?",
            "Forecasted Critical Staffing Shortages - Environmental Services",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "rnlpnweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Nurses: RN and LPNs Response ?",
            "Forecasted Critical Staffing Shortages -Nurses: RN and LPNs",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "rsprtrythrpstweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Respritory Therapists Response ?",
            "Forecasted Critical Staffing Shortages -Respritory Therapists",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "phtmcstweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Pharmacists and Pharmacy Techs Response ?",
            "Forecasted Critical Staffing Shortages -Pharmacists and Pharmacy Techs",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "physcnstweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Physicans: Attending Fellows Response ?",
            "Forecasted Critical Staffing Shortages -Physicans: Attending, Fellows",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherindpendtweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Other licensed independent practitioners: Advanced Practice Nurses Physician Assistances Response ?",
            "Forecasted Critical Staffing Shortages -Other licensed independent practitioners: Advanced Practice Nurses, Physician Assistances",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "tempweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Temporary physicians nurse etc (per diems travelers retired seasonal) Response ?",
            "Forecasted Critical Staffing Shortages -Temporary physicians, nurse, etc (per diems, travelers, retired, seasonal)",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherhcpweek",
        aliases: &[
            "Critical Staffing Shortages within a week?-Other HCP Personnel (Other persons who work in the facilities not detailed above Response ?",
            "Forecasted Critical Staffing Shortages -Other HCP Personnel (Other persons who work in the facilities not detailed above",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "otherhcpweeklist",
        aliases: &[
            "Critical Staffing Shortages within a week?-What other HCP Personnel not listed above do you have a critical staff shortage of? Response ?",
            "Forecasted Critical Staffing Shortages -What other HCP Personnel not listed above do you have a critical staff shortage of? ",
        ],
        is_public: false,
    },
    CanonicalField {
        short_name: "numvent",
        aliases: &["Ventilator Counts-Ventilators Number of ventilators"],
        is_public: true,
    },
    CanonicalField {
        short_name: "numventuse",
        aliases: &["Ventilator Counts-Ventilators Number of ventilators in use"],
        is_public: true,
    },
    CanonicalField {
        short_name: "numanesthesia",
        aliases: &[
            "Ventilator Counts-Ventilators Number of Anesthesia Machines",
            "Ventilator Counts-Ventilators Number of Anestesia Machines",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "numanesthesiaconvert",
        aliases: &[
            "Ventilator Counts-Ventilators Number of Anesthesia Machines that are converted to be used as a Vent",
            "Ventilator Counts-Ventilators Number of Anestesia Machines that are converted to be used as a Vent",
        ],
        is_public: true,
    },
    CanonicalField {
        short_name: "numcvd19onvent",
        aliases: &["Ventilator Usage-Ventilators Number of ventilators used for COVID-19 patients (confirmed)"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numecmo",
        aliases: &["Ventilator Usage-Ventilators ECMO units"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numecmouse",
        aliases: &["Ventilator Usage-Ventilators ECMO units in use"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numecmocvd19",
        aliases: &["Ventilator Usage-Ventilators ECMO units in use for COVID-19 patients"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiedtotal",
        aliases: &["Airborne Isolation Rooms-ED Total"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiedavailable",
        aliases: &["Airborne Isolation Rooms-ED Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiedoccupied",
        aliases: &["Airborne Isolation Rooms-ED Occupied requiring airborne isolation"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiedoccupiedcvd19",
        aliases: &["Airborne Isolation Rooms-ED Occupied by COVID-19 patient"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiinonicutotal",
        aliases: &["Airborne Isolation Rooms-Inpatient non-ICU Total"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiinonicuavail",
        aliases: &["Airborne Isolation Rooms-Inpatient non-ICU Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiinonicuoccupied",
        aliases: &["Airborne Isolation Rooms-Inpatient non-ICU Occupied requiring airborne isolation"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiinonicuoccupiedcvd19",
        aliases: &["Airborne Isolation Rooms-Inpatient non-ICU Occupied by COVID-19 patient"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiicutotal",
        aliases: &["Airborne Isolation Rooms-ICU Total"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiicuavail",
        aliases: &["Airborne Isolation Rooms-ICU Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiicuoccupied",
        aliases: &["Airborne Isolation Rooms-ICU Occupied requiring airborne isolation"],
        is_public: false,
    },
    CanonicalField {
        short_name: "aiiicuoccupiedcvd19",
        aliases: &["Airborne Isolation Rooms-ICU Occupied by COVID-19 patient"],
        is_public: false,
    },
];

/// Yes/No survey questions coerced to binary on ingest.
pub(crate) const HOSPITAL_BINARY_RESPONSE_FIELDS: &[&str] = &[
    "facrespplan",
    "n95fittested",
    "paprtrained",
    "ppedondoff",
    "needsanitizer",
    "needhandsoap",
    "needsolution",
    "needwipes",
    "needgloves",
    "needn95",
    "needpapr",
    "needpaprhoods",
    "needpaprfilters",
    "needmasks",
    "needgown",
    "needeyepro",
    "needcleaning",
    "shortn95",
    "shortpapr",
    "shortpaprhoods",
    "shortpaprfilters",
    "shortmasks",
    "shortgowns",
    "shorteyepro",
    "shortsoap",
    "shortsanitizer",
    "shortcleaning",
    "testlocal",
    "conspperesp",
    "consppereuseresp",
    "consppedispon95",
    "consppestaffhours",
    "consppecohortwodestaff",
    "consppecohortwdestaff",
    "n95utli3less",
    "n95utli47",
    "n95util814",
    "n95util1528",
    "n95util29more",
    "ppeutli3less",
    "ppeutli47",
    "ppeutil814",
    "ppeutil1528",
    "ppeutil29more",
    "nputli3less",
    "nputli47",
    "nputil814",
    "nputil1528",
    "nputil29more",
];
