//! Albanian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("about".into(), "Rreth nesh".into());
    t.insert("services".into(), "Sh\u{00EB}rbimet".into());
    t.insert("careers".into(), "Karriera".into());
    t.insert("contact".into(), "Kontakt".into());
    t.insert("language".into(), "Gjuha".into());
    t.insert("loading".into(), "Duke u ngarkuar...".into());
    t.insert("closeBanner".into(), "Mbyll banerin".into());

    // Hero
    t.insert("professionalCallCenter".into(), "Qend\u{00EB}r thirrjesh profesionale".into());
    t.insert("heroTitle".into(), "Connect Pro Group".into());
    t.insert("heroSubtitle".into(), "Partneri juaj p\u{00EB}r komunikimin me klient\u{00EB}t".into());
    t.insert("heroDescription".into(), "Ofrojm\u{00EB} sh\u{00EB}rbime shum\u{00EB}gjuh\u{00EB}sh\u{00E7}e qendre thirrjesh q\u{00EB} i mbajn\u{00EB} klient\u{00EB}t tuaj t\u{00EB} k\u{00EB}naqur gjat\u{00EB} gjith\u{00EB} or\u{00EB}ve.".into());
    t.insert("contactUs".into(), "Na kontaktoni".into());
    t.insert("ourServices".into(), "Sh\u{00EB}rbimet tona".into());
    t.insert("callCenterImage".into(), "Ekipi i qendr\u{00EB}s s\u{00EB} thirrjeve n\u{00EB} pun\u{00EB}".into());
    t.insert("yearsExperience".into(), "Vite p\u{00EB}rvoj\u{00EB}".into());
    t.insert("support247".into(), "Mb\u{00EB}shtetje 24/7".into());
    t.insert("premiumService".into(), "Sh\u{00EB}rbim premium".into());
    t.insert("alwaysAvailable".into(), "Gjithmon\u{00EB} n\u{00EB} dispozicion".into());

    // About
    t.insert("aboutTitle".into(), "Rreth nesh".into());
    t.insert("aboutDescription".into(), "Connect Pro Group \u{00EB}sht\u{00EB} nj\u{00EB} qend\u{00EB}r thirrjesh me seli n\u{00EB} Tiran\u{00EB} q\u{00EB} mb\u{00EB}shtet kompani n\u{00EB} t\u{00EB} gjith\u{00EB} Evrop\u{00EB}n me sh\u{00EB}rbim t\u{00EB} besuesh\u{00EB}m ndaj klientit.".into());
    t.insert("mission".into(), "Misioni yn\u{00EB}".into());
    t.insert("missionText".into(), "T\u{00EB} kthejm\u{00EB} \u{00E7}do kontakt me klientin n\u{00EB} nj\u{00EB} p\u{00EB}rvoj\u{00EB} pozitive p\u{00EB}r partner\u{00EB}t tan\u{00EB}.".into());
    t.insert("vision".into(), "Vizioni yn\u{00EB}".into());
    t.insert("visionText".into(), "T\u{00EB} jemi qendra kryesore e thirrjeve n\u{00EB} rajon p\u{00EB}r cil\u{00EB}si dhe besim.".into());
    t.insert("clientSatisfaction".into(), "K\u{00EB}naq\u{00EB}sia e klient\u{00EB}ve".into());
    t.insert("activeClients".into(), "Klient\u{00EB} aktiv\u{00EB}".into());
    t.insert("values".into(), "Vlerat tona".into());
    t.insert("professionalism".into(), "Profesionalizmi".into());
    t.insert("professionalismText".into(), "Agjent\u{00EB} t\u{00EB} trajnuar q\u{00EB} trajtojn\u{00EB} \u{00E7}do k\u{00EB}rkes\u{00EB} me kujdes.".into());
    t.insert("innovation".into(), "Inovacioni".into());
    t.insert("innovationText".into(), "Mjete dhe procese moderne p\u{00EB}r mb\u{00EB}shtetje m\u{00EB} t\u{00EB} shpejt\u{00EB}.".into());
    t.insert("excellence".into(), "Ekselenca".into());
    t.insert("excellenceText".into(), "Standarde t\u{00EB} larta n\u{00EB} \u{00E7}do telefonat\u{00EB}.".into());

    // Services
    t.insert("servicesTitle".into(), "Sh\u{00EB}rbimet tona".into());
    t.insert("servicesDescription".into(), "Zgjidhje t\u{00EB} plota outsourcing p\u{00EB}r komunikimin me klient\u{00EB}t tuaj.".into());
    t.insert("customerService".into(), "Sh\u{00EB}rbimi ndaj klientit".into());
    t.insert("customerServiceDesc".into(), "Trajtim miq\u{00EB}sor dhe profesional i k\u{00EB}rkesave me telefon, email dhe chat.".into());
    t.insert("technicalSupport".into(), "Mb\u{00EB}shtetje teknike".into());
    t.insert("technicalSupportDesc".into(), "Mb\u{00EB}shtetje e nivelit t\u{00EB} par\u{00EB} dhe t\u{00EB} dyt\u{00EB} p\u{00EB}r produktet tuaja.".into());
    t.insert("crmManagement".into(), "Menaxhimi CRM".into());
    t.insert("crmManagementDesc".into(), "Kujdes p\u{00EB}r t\u{00EB} dh\u{00EB}nat dhe marr\u{00EB}dh\u{00EB}niet me klient\u{00EB}t.".into());
    t.insert("salesSupport".into(), "Mb\u{00EB}shtetje n\u{00EB} shitje".into());
    t.insert("salesSupportDesc".into(), "Shitje hyr\u{00EB}se dhe dal\u{00EB}se q\u{00EB} rrisin t\u{00EB} ardhurat tuaja.".into());
    t.insert("appointmentSupport".into(), "Caktimi i takimeve".into());
    t.insert("appointmentSupportDesc".into(), "Rezervim, konfirmim dhe zhvendosje takimesh p\u{00EB}r klient\u{00EB}t tuaj.".into());
    t.insert("surveysMarketResearch".into(), "Sondazhe dhe k\u{00EB}rkime tregu".into());
    t.insert("surveysMarketResearchDesc".into(), "Sondazhe telefonike p\u{00EB}r njohuri t\u{00EB} besueshme t\u{00EB} tregut.".into());
    t.insert("orderProcessing".into(), "P\u{00EB}rpunimi i porosive".into());
    t.insert("orderProcessingDesc".into(), "Trajtim i shpejt\u{00EB} dhe i sakt\u{00EB} i porosive, kthimeve dhe ankesave.".into());
    t.insert("contentModeration".into(), "Moderimi i p\u{00EB}rmbajtjes".into());
    t.insert("contentModerationDesc".into(), "Kontroll i p\u{00EB}rmbajtjes s\u{00EB} p\u{00EB}rdoruesve p\u{00EB}r platforma t\u{00EB} sigurta.".into());
    t.insert("backOfficeServices".into(), "Sh\u{00EB}rbime back office".into());
    t.insert("backOfficeServicesDesc".into(), "Futje t\u{00EB} dh\u{00EB}nash, p\u{00EB}rpunim dokumentesh dhe detyra administrative.".into());
    t.insert("previousSlide".into(), "Sllajdi i m\u{00EB}parsh\u{00EB}m".into());
    t.insert("nextSlide".into(), "Sllajdi tjet\u{00EB}r".into());
    t.insert("goToSlide".into(), "Shko te sllajdi".into());

    // Partners
    t.insert("partnersTitle".into(), "Partner\u{00EB}t tan\u{00EB}".into());
    t.insert("partnersDescription".into(), "Kompani kryesore na besojn\u{00EB} klient\u{00EB}t e tyre.".into());
    t.insert("vodafoneTitle".into(), "Vodafone".into());
    t.insert("vodafoneDesc".into(), "Telekomunikacion".into());
    t.insert("sigalTitle".into(), "Sigal".into());
    t.insert("sigalDesc".into(), "Sigurime".into());
    t.insert("credinsTitle".into(), "Credins Bank".into());
    t.insert("credinsDesc".into(), "Banka".into());
    t.insert("balfinTitle".into(), "Balfin Group".into());
    t.insert("balfinDesc".into(), "Investime".into());
    t.insert("wideExperience".into(), "P\u{00EB}rvoj\u{00EB} e gjer\u{00EB}".into());
    t.insert("wideExperienceText".into(), "Projekte n\u{00EB} telekomunikacion, financ\u{00EB} dhe tregti.".into());
    t.insert("manyPartners".into(), "Shum\u{00EB} partner\u{00EB}".into());
    t.insert("manyPartnersText".into(), "Bashk\u{00EB}punim afatgjat\u{00EB} me marka t\u{00EB} njohura.".into());
    t.insert("support24_7".into(), "Mb\u{00EB}shtetje 24/7".into());
    t.insert("support24_7Text".into(), "Ekipi yn\u{00EB} \u{00EB}sht\u{00EB} aty p\u{00EB}r klient\u{00EB}t tuaj dit\u{00EB} e nat\u{00EB}.".into());

    // Careers
    t.insert("careersTitle".into(), "Karriera".into());
    t.insert("careersDescription".into(), "Bashkohu me ekipin ton\u{00EB} dhe rrit me ne.".into());
    t.insert("customerServicePosition".into(), "Agjent i sh\u{00EB}rbimit ndaj klientit".into());
    t.insert("customerServiceRoleDesc".into(), "Ndihmo klient\u{00EB}t e partner\u{00EB}ve tan\u{00EB} me telefon dhe email.".into());
    t.insert("albanianEnglishRequired".into(), "Shqip dhe anglisht rrjedhsh\u{00EB}m".into());
    t.insert("communicationSkills".into(), "Aft\u{00EB}si t\u{00EB} mira komunikimi".into());
    t.insert("customerServiceExp".into(), "P\u{00EB}rvoja n\u{00EB} sh\u{00EB}rbimin ndaj klientit \u{00EB}sht\u{00EB} nj\u{00EB} avantazh".into());
    t.insert("shiftWork".into(), "Gatishm\u{00EB}ri p\u{00EB}r pun\u{00EB} me turne".into());
    t.insert("technicalSupportPosition".into(), "Agjent i mb\u{00EB}shtetjes teknike".into());
    t.insert("technicalSupportRoleDesc".into(), "Zgjidh probleme teknike p\u{00EB}r p\u{00EB}rdoruesit.".into());
    t.insert("itDegree".into(), "Diplom\u{00EB} n\u{00EB} IT ose fush\u{00EB} t\u{00EB} ngjashme".into());
    t.insert("technicalKnowledge".into(), "Njohuri t\u{00EB} forta teknike".into());
    t.insert("problemSolving".into(), "Aft\u{00EB}si p\u{00EB}r zgjidhjen e problemeve".into());
    t.insert("technicalSupportExp".into(), "P\u{00EB}rvoj\u{00EB} n\u{00EB} mb\u{00EB}shtetje teknike".into());
    t.insert("fullName".into(), "Emri i plot\u{00EB}".into());
    t.insert("phoneNumber".into(), "Numri i telefonit".into());
    t.insert("position".into(), "Pozicioni".into());
    t.insert("selectPosition".into(), "Zgjidhni nj\u{00EB} pozicion".into());
    t.insert("uploadCV".into(), "Ngarko CV".into());
    t.insert("sendApplication".into(), "D\u{00EB}rgo aplikimin".into());

    // Contact
    t.insert("contactTitle".into(), "Kontakt".into());
    t.insert("contactDescription".into(), "Na kontaktoni. Mezi presim t\u{00EB} d\u{00EB}gjojm\u{00EB} nga ju.".into());
    t.insert("phone".into(), "Telefoni".into());
    t.insert("email".into(), "Email".into());
    t.insert("address".into(), "Adresa".into());
    t.insert("name".into(), "Emri".into());
    t.insert("message".into(), "Mesazhi".into());
    t.insert("sendMessage".into(), "D\u{00EB}rgo mesazhin".into());
    t.insert("socialFollow".into(), "Na ndiqni".into());

    t
}
