symcore::bin!(sc_actions);
