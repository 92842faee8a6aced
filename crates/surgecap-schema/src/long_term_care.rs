//! Long-term-care survey schema.
//!
//! Structurally identical to the hospital schema but an independent field
//! set; the two are never merged. The original feed defines no public
//! extract for long-term-care facilities, so nothing here is public.

use surgecap_model::CanonicalField;

pub(crate) const LTC_FIELDS: &[CanonicalField] = &[
    CanonicalField {
        short_name: "ltcname",
        aliases: &["LTCName"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltcstreetaddress",
        aliases: &["LTCStreetAddress"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltcstate",
        aliases: &["LTCState"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltccity",
        aliases: &["LTCCity"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltczip",
        aliases: &["LTCZip"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltclatitude",
        aliases: &["LTCLatitude"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltclongitude",
        aliases: &["LTCLongitude"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ltccounty",
        aliases: &["LTCCounty"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlavlbdsstffd",
        aliases: &["Total Available-Beds Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlavlbdsavl",
        aliases: &["Total Available-Beds Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mlstffdbds",
        aliases: &["Gender-Male Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mlavl",
        aliases: &["Gender-Male Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "fmalstff",
        aliases: &["Gender-Female Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "fmalavl",
        aliases: &["Gender-Female Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "prsnlcrstff",
        aliases: &["Care Level / Approved Stay Status-Personal Care Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "prsnlcravl",
        aliases: &["Care Level / Approved Stay Status-Personal Care Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "asstdlvngstff",
        aliases: &["Care Level / Approved Stay Status-Assisted Living Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "asstdlvngavl",
        aliases: &["Care Level / Approved Stay Status-Assisted Living Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "skllnrsstff",
        aliases: &["Care Level / Approved Stay Status-Skilled Nursing Care Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "skllnrsavl",
        aliases: &["Care Level / Approved Stay Status-Skilled Nursing Care Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rhbstff",
        aliases: &["Care Level / Approved Stay Status-Rehab Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "rhbavl",
        aliases: &["Care Level / Approved Stay Status-Rehab Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cntcrstff",
        aliases: &["Care Level / Approved Stay Status-Continuing Care Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cntcravl",
        aliases: &["Care Level / Approved Stay Status-Continuing Care Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mdcrstff",
        aliases: &["Insurance-Medicare Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mdcravl",
        aliases: &["Insurance-Medicare Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mdcdstff",
        aliases: &["Insurance-Medicaid Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mdcdavl",
        aliases: &["Insurance-Medicaid Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "prvtstff",
        aliases: &["Insurance-Private Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "prvtavl",
        aliases: &["Insurance-Private Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "slfpystff",
        aliases: &["Insurance-Personal Resource (Self-Pay) Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "slfpyavl",
        aliases: &["Insurance-Personal Resource (Self-Pay) Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "othrstff",
        aliases: &["Insurance-Other Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "othravl",
        aliases: &["Insurance-Other Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "trchtmystff",
        aliases: &["Technology / Care Considerations-Tracheotomy Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "trchtmyavl",
        aliases: &["Technology / Care Considerations-Tracheotomy Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "vntltrstff",
        aliases: &["Technology / Care Considerations-Ventilator Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "vntltravl",
        aliases: &["Technology / Care Considerations-Ventilator Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cpapstff",
        aliases: &["Technology / Care Considerations-CPAP Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cpapavl",
        aliases: &["Technology / Care Considerations-CPAP Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "fdgtbstff",
        aliases: &["Technology / Care Considerations-Feeding Tube Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "fdgtbavl",
        aliases: &["Technology / Care Considerations-Feeding Tube Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "isostff",
        aliases: &["Technology / Care Considerations-Isolation Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "isoavl",
        aliases: &["Technology / Care Considerations-Isolation Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cdcmntrstff",
        aliases: &["Technology / Care Considerations-Cardiac Monitoring Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "cdcmntavl",
        aliases: &["Technology / Care Considerations-Cardiac Monitoring Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ivthrpystff",
        aliases: &["Technology / Care Considerations-IV Therapy Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "ivthrpyavl",
        aliases: &["Technology / Care Considerations-IV Therapy Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "brtrcstff",
        aliases: &["Special Needs-Bariatric Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "brtravl",
        aliases: &["Special Needs-Bariatric Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mmrystff",
        aliases: &["Special Needs-Memory Care / Secured Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "mmryavl",
        aliases: &["Special Needs-Memory Care / Secured Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "dlysatff",
        aliases: &["Special Needs-Dialysis Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "dlysavl",
        aliases: &["Special Needs-Dialysis Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "frnscimprstff",
        aliases: &["Special Needs-Forensic Court Impairment Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "frnscimpravl",
        aliases: &["Special Needs-Forensic Court Impairment Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "smkrstff",
        aliases: &["Special Needs-Smoker Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "smkravl",
        aliases: &["Special Needs-Smoker Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "wndrstff",
        aliases: &["Special Needs-Wanderer Staffed Beds"],
        is_public: false,
    },
    CanonicalField {
        short_name: "wndravl",
        aliases: &["Special Needs-Wanderer Currently Available"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numnwptnt",
        aliases: &["Admission Data-Number of New Patients awaiting admission Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numcvd19rms",
        aliases: &["Admission Data-Number of single occupancy rooms available for COVID-19 Patients Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numreshspc",
        aliases: &["Admission Data-Number of Residents on Hospice Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numresdnr",
        aliases: &["Admission Data-Number of Residents with DNR Status Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numressxoffndr",
        aliases: &["Admission Data-Number of Residents on Sex Offender List Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numresisoncvd19",
        aliases: &["Admission Data-Number of Residents in Isolation for NON-COVID Reasons Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "numresambu",
        aliases: &["Admission Data-Number of Residents that would require an ambulance to transfer Response ?"],
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
        short_name: "ttlreswcvd19",
        aliases: &["COVID-19 Resident Counts-Total number of Residents diagnosed with COVID-19: "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlrespuicvd19",
        aliases: &["COVID-19 Resident Counts-Total number of Residents under suspicion for COVID-19 (PUI): "],
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
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Cohorting Residents without dedicated staff Response ?"],
        is_public: false,
    },
    CanonicalField {
        short_name: "consppecohortwdestaff",
        aliases: &["Are you currently implementing conservation strategies to preserve PPE:-Cohorting Residents with dedicated staff Response ?"],
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
        short_name: "ttlempcall",
        aliases: &["Employee Status-Total Employee Call Outs/Absenteeism "],
        is_public: false,
    },
    CanonicalField {
        short_name: "numcorn",
        aliases: &["Employee Status-Number of Call Outs that are RN "],
        is_public: false,
    },
    CanonicalField {
        short_name: "numcolpncna",
        aliases: &["Employee Status-Number of Call Outs that are LPN/CNA "],
        is_public: false,
    },
    CanonicalField {
        short_name: "numcopca",
        aliases: &["Employee Status-Number of Call Outs that are Personal Care Assistants "],
        is_public: false,
    },
    CanonicalField {
        short_name: "ttlempcvd19",
        aliases: &["Employee Status-Call out reason: sick with COVID-19 "],
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
];

/// Yes/No survey questions coerced to binary on ingest.
pub(crate) const LTC_BINARY_RESPONSE_FIELDS: &[&str] = &[
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
];
