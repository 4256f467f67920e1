//! Italian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("about".into(), "Chi siamo".into());
    t.insert("services".into(), "Servizi".into());
    t.insert("careers".into(), "Carriere".into());
    t.insert("contact".into(), "Contatti".into());
    t.insert("language".into(), "Lingua".into());
    t.insert("loading".into(), "Caricamento...".into());
    t.insert("closeBanner".into(), "Chiudi il banner".into());

    // Hero
    t.insert("professionalCallCenter".into(), "Call center professionale".into());
    t.insert("heroTitle".into(), "Connect Pro Group".into());
    t.insert("heroSubtitle".into(), "Il vostro partner per la comunicazione con i clienti".into());
    t.insert("heroDescription".into(), "Offriamo servizi di call center multilingue che soddisfano i vostri clienti 24 ore su 24.".into());
    t.insert("contactUs".into(), "Contattaci".into());
    t.insert("ourServices".into(), "I nostri servizi".into());
    t.insert("callCenterImage".into(), "Team del call center al lavoro".into());
    t.insert("yearsExperience".into(), "Anni di esperienza".into());
    t.insert("support247".into(), "Supporto 24/7".into());
    t.insert("premiumService".into(), "Servizio premium".into());
    t.insert("alwaysAvailable".into(), "Sempre disponibili per voi".into());

    // About
    t.insert("aboutTitle".into(), "Chi siamo".into());
    t.insert("aboutDescription".into(), "Connect Pro Group \u{00E8} un call center con sede a Tirana che supporta aziende in tutta Europa con un servizio clienti affidabile e multilingue.".into());
    t.insert("mission".into(), "La nostra missione".into());
    t.insert("missionText".into(), "Trasformare ogni contatto con il cliente in un'esperienza positiva per i nostri partner.".into());
    t.insert("vision".into(), "La nostra visione".into());
    t.insert("visionText".into(), "Essere il call center di riferimento della regione per qualit\u{00E0} e fiducia.".into());
    t.insert("clientSatisfaction".into(), "Soddisfazione dei clienti".into());
    t.insert("activeClients".into(), "Clienti attivi".into());
    t.insert("values".into(), "I nostri valori".into());
    t.insert("professionalism".into(), "Professionalit\u{00E0}".into());
    t.insert("professionalismText".into(), "Operatori formati che gestiscono ogni richiesta con cura.".into());
    t.insert("innovation".into(), "Innovazione".into());
    t.insert("innovationText".into(), "Strumenti e processi moderni per un supporto pi\u{00F9} rapido.".into());
    t.insert("excellence".into(), "Eccellenza".into());
    t.insert("excellenceText".into(), "Standard elevati misurati in ogni singola chiamata.".into());

    // Services
    t.insert("servicesTitle".into(), "I nostri servizi".into());
    t.insert("servicesDescription".into(), "Soluzioni di outsourcing complete per la vostra comunicazione con i clienti.".into());
    t.insert("customerService".into(), "Servizio clienti".into());
    t.insert("customerServiceDesc".into(), "Gestione cordiale e competente delle richieste via telefono, e-mail e chat.".into());
    t.insert("technicalSupport".into(), "Supporto tecnico".into());
    t.insert("technicalSupportDesc".into(), "Supporto di primo e secondo livello per i vostri prodotti e servizi.".into());
    t.insert("crmManagement".into(), "Gestione CRM".into());
    t.insert("crmManagementDesc".into(), "Cura dei dati e delle relazioni con i vostri clienti.".into());
    t.insert("salesSupport".into(), "Supporto vendite".into());
    t.insert("salesSupportDesc".into(), "Vendite inbound e outbound che aumentano il vostro fatturato.".into());
    t.insert("appointmentSupport".into(), "Gestione appuntamenti".into());
    t.insert("appointmentSupportDesc".into(), "Prenotazione, conferma e spostamento degli appuntamenti per i vostri clienti.".into());
    t.insert("surveysMarketResearch".into(), "Sondaggi e ricerche di mercato".into());
    t.insert("surveysMarketResearchDesc".into(), "Sondaggi telefonici per informazioni di mercato affidabili.".into());
    t.insert("orderProcessing".into(), "Gestione ordini".into());
    t.insert("orderProcessingDesc".into(), "Gestione rapida e precisa di ordini, resi e reclami.".into());
    t.insert("contentModeration".into(), "Moderazione dei contenuti".into());
    t.insert("contentModerationDesc".into(), "Verifica dei contenuti degli utenti per piattaforme sicure.".into());
    t.insert("backOfficeServices".into(), "Servizi di back office".into());
    t.insert("backOfficeServicesDesc".into(), "Inserimento dati, elaborazione documenti e attivit\u{00E0} amministrative.".into());
    t.insert("previousSlide".into(), "Diapositiva precedente".into());
    t.insert("nextSlide".into(), "Diapositiva successiva".into());
    t.insert("goToSlide".into(), "Vai alla diapositiva".into());

    // Partners
    t.insert("partnersTitle".into(), "I nostri partner".into());
    t.insert("partnersDescription".into(), "Aziende leader ci affidano i loro clienti.".into());
    t.insert("vodafoneTitle".into(), "Vodafone".into());
    t.insert("vodafoneDesc".into(), "Telecomunicazioni".into());
    t.insert("sigalTitle".into(), "Sigal".into());
    t.insert("sigalDesc".into(), "Assicurazioni".into());
    t.insert("credinsTitle".into(), "Credins Bank".into());
    t.insert("credinsDesc".into(), "Servizi bancari".into());
    t.insert("balfinTitle".into(), "Balfin Group".into());
    t.insert("balfinDesc".into(), "Investimenti".into());
    t.insert("wideExperience".into(), "Ampia esperienza".into());
    t.insert("wideExperienceText".into(), "Progetti nelle telecomunicazioni, nella finanza e nel commercio.".into());
    t.insert("manyPartners".into(), "Molti partner".into());
    t.insert("manyPartnersText".into(), "Collaborazioni durature con marchi noti.".into());
    t.insert("support24_7".into(), "Supporto 24/7".into());
    t.insert("support24_7Text".into(), "Il nostro team \u{00E8} a disposizione dei vostri clienti giorno e notte.".into());

    // Careers
    t.insert("careersTitle".into(), "Carriere".into());
    t.insert("careersDescription".into(), "Entra nel nostro team e cresci con noi.".into());
    t.insert("customerServicePosition".into(), "Operatore servizio clienti".into());
    t.insert("customerServiceRoleDesc".into(), "Assisti i clienti dei nostri partner via telefono ed e-mail.".into());
    t.insert("albanianEnglishRequired".into(), "Albanese e inglese fluenti".into());
    t.insert("communicationSkills".into(), "Ottime capacit\u{00E0} comunicative".into());
    t.insert("customerServiceExp".into(), "Esperienza nel servizio clienti \u{00E8} un vantaggio".into());
    t.insert("shiftWork".into(), "Disponibilit\u{00E0} a lavorare su turni".into());
    t.insert("technicalSupportPosition".into(), "Operatore supporto tecnico".into());
    t.insert("technicalSupportRoleDesc".into(), "Risolvi i problemi tecnici degli utenti finali.".into());
    t.insert("itDegree".into(), "Laurea in informatica o campo affine".into());
    t.insert("technicalKnowledge".into(), "Solide conoscenze tecniche".into());
    t.insert("problemSolving".into(), "Capacit\u{00E0} di problem solving".into());
    t.insert("technicalSupportExp".into(), "Esperienza nel supporto tecnico".into());
    t.insert("fullName".into(), "Nome completo".into());
    t.insert("phoneNumber".into(), "Numero di telefono".into());
    t.insert("position".into(), "Posizione".into());
    t.insert("selectPosition".into(), "Seleziona una posizione".into());
    t.insert("uploadCV".into(), "Carica il CV".into());
    t.insert("sendApplication".into(), "Invia candidatura".into());

    // Contact
    t.insert("contactTitle".into(), "Contatti".into());
    t.insert("contactDescription".into(), "Mettiti in contatto con noi. Saremo felici di sentirti.".into());
    t.insert("phone".into(), "Telefono".into());
    t.insert("email".into(), "E-mail".into());
    t.insert("address".into(), "Indirizzo".into());
    t.insert("name".into(), "Nome".into());
    t.insert("message".into(), "Messaggio".into());
    t.insert("sendMessage".into(), "Invia messaggio".into());
    t.insert("socialFollow".into(), "Seguici".into());

    t
}
